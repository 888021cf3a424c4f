//! Free text to [`Requirement`].

use std::sync::LazyLock;

use itertools::Itertools;
use regex::Regex;
use tracing::debug;

use super::tables::{
    BUDGET_PATTERNS, LANGUAGE_PATTERNS, LOCATION_PATTERNS, PROJECT_ROLE_RULES, SKILL_VOCABULARY,
    URGENCY_PATTERNS,
};
use super::{Domain, PROJECT_MANAGER, Requirement, best_category};
use crate::config::TeamConfig;
use crate::error::{Result, ScoutError};
use crate::text::{contains_term, fold};

// Runs on folded text, so `kişilik` arrives as `kisilik`.
static TEAM_SIZE_UNIT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(\d{1,3})\s*-?\s*(?:kisilik|kisi|people|persons?|members?|developers?|engineers?|experts?|uzman|gelistirici)\b",
    )
    .expect("team size pattern compiles")
});

static TEAM_OF: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bteam of (\d{1,3})\b").expect("team-of pattern compiles"));

#[derive(Debug, Clone)]
pub struct RequirementExtractor {
    default_team_size: usize,
    max_team_size: usize,
}

impl Default for RequirementExtractor {
    fn default() -> Self {
        Self::new(&TeamConfig::default())
    }
}

impl RequirementExtractor {
    #[must_use]
    pub fn new(config: &TeamConfig) -> Self {
        let max_team_size = config.max_size.max(1);
        Self {
            default_team_size: config.default_size.clamp(1, max_team_size),
            max_team_size,
        }
    }

    /// Parse `description` into a requirement.
    ///
    /// `explicit_team_size` overrides whatever the text says and must be
    /// positive; that is the only way this fails.
    pub fn extract(&self, description: &str, explicit_team_size: Option<i64>) -> Result<Requirement> {
        let team_size = match explicit_team_size {
            Some(size) if size <= 0 => {
                return Err(ScoutError::InvalidRequirement(format!(
                    "team size must be positive, got {size}"
                )));
            }
            Some(size) => usize::try_from(size)
                .unwrap_or(usize::MAX)
                .min(self.max_team_size),
            None => self.team_size_from_text(description),
        };

        let folded = fold(description);
        let domain = Domain::detect(&folded);
        let requirement = Requirement {
            description: description.to_string(),
            team_size,
            roles: derive_roles(&folded, team_size, domain),
            skills: detect_skills(&folded),
            domain,
            urgency: best_category(&folded, URGENCY_PATTERNS).unwrap_or_default(),
            budget: best_category(&folded, BUDGET_PATTERNS).unwrap_or_default(),
            location: best_category(&folded, LOCATION_PATTERNS).unwrap_or_default(),
            languages: detect_languages(&folded),
        };

        debug!(
            target: "requirements",
            team_size = requirement.team_size,
            domain = %requirement.domain,
            urgency = %requirement.urgency,
            budget = %requirement.budget,
            location = %requirement.location,
            roles = requirement.roles.len(),
            skills = requirement.skills.len(),
            "requirement extracted"
        );
        Ok(requirement)
    }

    /// First "N people" style mention, else the configured default.
    ///
    /// A stated size of zero reads as "not stated".
    #[must_use]
    pub fn team_size_from_text(&self, description: &str) -> usize {
        let folded = fold(description);
        TEAM_SIZE_UNIT
            .captures(&folded)
            .or_else(|| TEAM_OF.captures(&folded))
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<usize>().ok())
            .filter(|size| *size > 0)
            .map_or(self.default_team_size, |size| size.min(self.max_team_size))
    }
}

/// Project-type rules, then a project manager for teams over two, then the
/// domain default role as padding; de-duplicated and cut to `team_size`.
fn derive_roles(folded: &str, team_size: usize, domain: Domain) -> Vec<String> {
    let mut roles: Vec<String> = PROJECT_ROLE_RULES
        .iter()
        .filter(|(triggers, _)| triggers.iter().any(|t| contains_term(folded, t)))
        .flat_map(|(_, roles)| roles.iter().map(|r| (*r).to_string()))
        .collect();

    if team_size > 2 {
        roles.push(PROJECT_MANAGER.to_string());
    }
    while roles.len() < team_size {
        roles.push(domain.default_role().to_string());
    }

    roles.into_iter().unique().take(team_size).collect()
}

fn detect_skills(folded: &str) -> Vec<String> {
    SKILL_VOCABULARY
        .iter()
        .filter(|skill| contains_term(folded, skill))
        .map(|skill| (*skill).to_string())
        .collect()
}

fn detect_languages(folded: &str) -> Vec<String> {
    LANGUAGE_PATTERNS
        .iter()
        .filter(|(pattern, _)| contains_term(folded, pattern))
        .map(|(_, language)| (*language).to_string())
        .unique()
        .collect()
}
