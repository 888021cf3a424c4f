//! Structured requirements derived from a free-text project description.
//!
//! The extractor is rule based: every classification runs over static
//! `(pattern, category)` tables in [`tables`], and ties are resolved by
//! category name so the outcome never depends on table order.

pub mod extractor;
pub mod tables;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ScoutError;
use crate::text::{contains_term, fold};

pub use extractor::RequirementExtractor;

/// Role appended to every team larger than two people.
pub const PROJECT_MANAGER: &str = "Project Manager";

/// A closed set of labels that pattern tables classify into.
pub trait Category: Copy + PartialEq {
    /// Stable lowercase name; also the tie-break key.
    fn name(self) -> &'static str;
}

/// Pick the category with the most whole-term pattern hits in `folded_text`.
///
/// Equal hit counts go to the alphabetically first category name. Returns
/// `None` when nothing matched.
pub fn best_category<C: Category>(folded_text: &str, table: &[(&str, C)]) -> Option<C> {
    let mut counts: Vec<(C, usize)> = Vec::new();
    for (pattern, category) in table {
        if !contains_term(folded_text, pattern) {
            continue;
        }
        match counts.iter_mut().find(|(c, _)| c == category) {
            Some((_, count)) => *count += 1,
            None => counts.push((*category, 1)),
        }
    }
    counts
        .into_iter()
        .max_by(|(a, a_count), (b, b_count)| {
            a_count
                .cmp(b_count)
                .then_with(|| b.name().cmp(a.name()))
        })
        .map(|(category, _)| category)
}

macro_rules! named_category {
    ($ty:ident { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl Category for $ty {
            fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl $ty {
            pub const ALL: &'static [$ty] = &[$(Self::$variant),+];
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    Medium,
    High,
}

named_category!(Urgency { Low => "low", Medium => "medium", High => "high" });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Budget {
    Low,
    #[default]
    Medium,
    High,
}

named_category!(Budget { Low => "low", Medium => "medium", High => "high" });

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LocationPreference {
    Local,
    Remote,
    #[default]
    Hybrid,
}

named_category!(LocationPreference { Local => "local", Remote => "remote", Hybrid => "hybrid" });

/// Coarse industry label shared by requirements and candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    Technology,
    Marketing,
    Finance,
    Health,
    Education,
    RealEstate,
    Logistics,
    Energy,
    Environment,
    Legal,
    HumanResources,
    #[default]
    General,
}

named_category!(Domain {
    Technology => "technology",
    Marketing => "marketing",
    Finance => "finance",
    Health => "health",
    Education => "education",
    RealEstate => "real-estate",
    Logistics => "logistics",
    Energy => "energy",
    Environment => "environment",
    Legal => "legal",
    HumanResources => "human-resources",
    General => "general",
});

impl Domain {
    /// Role used to pad a team when the description names too few roles.
    #[must_use]
    pub const fn default_role(self) -> &'static str {
        match self {
            Self::Technology => "Software Developer",
            Self::Marketing => "Marketing Specialist",
            Self::Finance => "Financial Analyst",
            Self::Health => "Healthcare Consultant",
            Self::Education => "Education Specialist",
            Self::RealEstate => "Real Estate Consultant",
            Self::Logistics => "Logistics Coordinator",
            Self::Energy => "Energy Engineer",
            Self::Environment => "Environmental Consultant",
            Self::Legal => "Legal Advisor",
            Self::HumanResources => "HR Specialist",
            Self::General => "Consultant",
        }
    }

    /// Classify folded text against the domain table.
    #[must_use]
    pub fn detect(folded_text: &str) -> Self {
        best_category(folded_text, tables::DOMAIN_PATTERNS).unwrap_or_default()
    }
}

impl FromStr for Domain {
    type Err = ScoutError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let folded = fold(value.trim()).replace(['_', ' '], "-");
        if let Some(domain) = Self::ALL.iter().find(|d| d.name() == folded) {
            return Ok(*domain);
        }
        tables::DOMAIN_ALIASES
            .iter()
            .find(|(alias, _)| *alias == folded)
            .map(|(_, domain)| *domain)
            .ok_or_else(|| ScoutError::InvalidRequirement(format!("unknown domain: {value}")))
    }
}

/// What the user is asking for, in structured form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Requirement {
    pub description: String,
    pub team_size: usize,
    pub roles: Vec<String>,
    pub skills: Vec<String>,
    pub domain: Domain,
    pub urgency: Urgency,
    pub budget: Budget,
    pub location: LocationPreference,
    /// Spoken languages the description asks for, if any.
    #[serde(default)]
    pub languages: Vec<String>,
}

impl Requirement {
    /// A requirement with default classifications and no roles or skills.
    #[must_use]
    pub fn new(description: impl Into<String>, team_size: usize) -> Self {
        Self {
            description: description.into(),
            team_size: team_size.max(1),
            roles: Vec::new(),
            skills: Vec::new(),
            domain: Domain::General,
            urgency: Urgency::Medium,
            budget: Budget::Medium,
            location: LocationPreference::Hybrid,
            languages: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_roles(mut self, roles: &[&str]) -> Self {
        self.roles = roles.iter().map(|r| (*r).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_skills(mut self, skills: &[&str]) -> Self {
        self.skills = skills.iter().map(|s| (*s).to_string()).collect();
        self
    }

    #[must_use]
    pub const fn with_domain(mut self, domain: Domain) -> Self {
        self.domain = domain;
        self
    }

    #[must_use]
    pub const fn with_urgency(mut self, urgency: Urgency) -> Self {
        self.urgency = urgency;
        self
    }

    #[must_use]
    pub const fn with_budget(mut self, budget: Budget) -> Self {
        self.budget = budget;
        self
    }

    #[must_use]
    pub const fn with_location(mut self, location: LocationPreference) -> Self {
        self.location = location;
        self
    }

    #[must_use]
    pub fn with_languages(mut self, languages: &[&str]) -> Self {
        self.languages = languages.iter().map(|l| (*l).to_string()).collect();
        self
    }

    /// Text handed to the embedding provider for the query side.
    #[must_use]
    pub fn query_text(&self) -> String {
        let mut parts = vec![self.description.clone()];
        if !self.roles.is_empty() {
            parts.push(self.roles.join(", "));
        }
        if !self.skills.is_empty() {
            parts.push(self.skills.join(", "));
        }
        parts.push(self.domain.name().to_string());
        parts.join("\n")
    }
}
