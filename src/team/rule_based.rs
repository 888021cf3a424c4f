//! Scoring without embeddings.
//!
//! Used when a ranking is wanted for every candidate, with nothing filtered
//! out, or when no embedding provider should be touched at all.

use rayon::prelude::*;
use tracing::debug;

use super::{SCORE_SCALE, ScoredCandidate, fraction_score};
use crate::config::ProfileConfig;
use crate::profile::CandidateProfile;
use crate::requirements::Requirement;
use crate::search::candidate::CandidateEmbedder;
use crate::search::signals;
use crate::text::fold;

const ROLE_WEIGHT: f64 = 0.30;
const SKILL_WEIGHT: f64 = 0.25;
const RELATIONSHIP_WEIGHT: f64 = 0.20;
const AVAILABILITY_WEIGHT: f64 = 0.15;
const LOCATION_WEIGHT: f64 = 0.10;

#[derive(Debug, Clone, Default)]
pub struct RuleBasedMatcher {
    text_builder: CandidateEmbedder,
}

impl RuleBasedMatcher {
    #[must_use]
    pub fn new(config: &ProfileConfig) -> Self {
        Self {
            text_builder: CandidateEmbedder::new(config),
        }
    }

    /// Score every candidate and sort by total descending (stable).
    #[must_use]
    pub fn score(
        &self,
        requirement: &Requirement,
        candidates: &[CandidateProfile],
    ) -> Vec<ScoredCandidate> {
        let mut scored: Vec<ScoredCandidate> = candidates
            .par_iter()
            .map(|profile| self.score_one(requirement, profile))
            .collect();
        scored.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
        debug!(target: "scoring", candidates = scored.len(), "rule-based scoring done");
        scored
    }

    fn score_one(&self, requirement: &Requirement, profile: &CandidateProfile) -> ScoredCandidate {
        let folded_text = fold(&self.text_builder.build_text(profile));
        let roles = CandidateEmbedder::roles_of(profile);
        let locations = CandidateEmbedder::locations_of(profile);

        let matched_roles = signals::matched_roles(&requirement.roles, &roles, &folded_text);
        let matched_skills =
            signals::matched_skills(&requirement.skills, &signals::skill_items(profile));

        let role_match = fraction_score(matched_roles.len(), requirement.roles.len());
        let skill_match = fraction_score(matched_skills.len(), requirement.skills.len());
        let relationship_score = profile.relationship();
        let availability_score = signals::availability(profile) * SCORE_SCALE;
        let location_score = signals::location_fit(&locations, requirement) * SCORE_SCALE;

        let total_score = ROLE_WEIGHT * role_match
            + SKILL_WEIGHT * skill_match
            + RELATIONSHIP_WEIGHT * relationship_score
            + AVAILABILITY_WEIGHT * availability_score
            + LOCATION_WEIGHT * location_score;

        ScoredCandidate {
            candidate: profile.clone(),
            role_match,
            skill_match,
            relationship_score,
            availability_score,
            location_score,
            total_score,
            matched_roles,
            matched_skills,
        }
    }
}
