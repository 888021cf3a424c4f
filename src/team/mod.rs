//! Team assembly over scored candidates.
//!
//! Everything here works on the 0–10 [`ScoredCandidate`] scale, whether the
//! scores came from the hybrid retrieval ranking or from the rule-based
//! matcher.

pub mod assembler;
pub mod rule_based;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use assembler::TeamAssembler;
pub use rule_based::RuleBasedMatcher;

use crate::profile::CandidateProfile;
use crate::requirements::Requirement;
use crate::search::hybrid::RetrievalScore;

/// Upper end of every team-level score.
pub const SCORE_SCALE: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    pub candidate: CandidateProfile,
    pub role_match: f64,
    pub skill_match: f64,
    pub relationship_score: f64,
    pub availability_score: f64,
    pub location_score: f64,
    pub total_score: f64,
    pub matched_roles: Vec<String>,
    pub matched_skills: Vec<String>,
}

impl ScoredCandidate {
    /// Rescale a retrieval score onto the team scale.
    #[must_use]
    pub fn from_retrieval(
        candidate: CandidateProfile,
        score: &RetrievalScore,
        requirement: &Requirement,
    ) -> Self {
        let evidence = &score.evidence;
        Self {
            candidate,
            role_match: fraction_score(evidence.matched_roles.len(), requirement.roles.len()),
            skill_match: fraction_score(evidence.matched_skills.len(), requirement.skills.len()),
            relationship_score: evidence.relationship,
            availability_score: evidence.availability * SCORE_SCALE,
            location_score: evidence.location_fit * SCORE_SCALE,
            total_score: (score.total_score * SCORE_SCALE).max(0.0),
            matched_roles: evidence.matched_roles.clone(),
            matched_skills: evidence.matched_skills.clone(),
        }
    }
}

/// `matched / required` on the 0–10 scale; nothing required scores 0.
#[must_use]
pub fn fraction_score(matched: usize, required: usize) -> f64 {
    if required == 0 {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let ratio = matched.min(required) as f64 / required as f64;
    ratio * SCORE_SCALE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    FastStart,
    SeniorLeadership,
    LocalAlignment,
    Balanced,
}

impl Strategy {
    /// Every strategy, in output order.
    pub const ALL: [Self; 4] = [
        Self::FastStart,
        Self::SeniorLeadership,
        Self::LocalAlignment,
        Self::Balanced,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FastStart => "fast_start",
            Self::SeniorLeadership => "senior_leadership",
            Self::LocalAlignment => "local_alignment",
            Self::Balanced => "balanced",
        }
    }

    /// The score this strategy sorts by.
    #[must_use]
    pub const fn key(self, candidate: &ScoredCandidate) -> f64 {
        match self {
            Self::FastStart => candidate.availability_score,
            Self::SeniorLeadership => candidate.role_match,
            Self::LocalAlignment => candidate.location_score,
            Self::Balanced => candidate.total_score,
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostBand {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamComposition {
    pub roles: Vec<String>,
    pub skills: Vec<String>,
    pub average_relationship_score: f64,
    pub average_availability_score: f64,
    pub diversity_score: f64,
    pub coverage_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRecommendation {
    pub strategy: Strategy,
    pub members: Vec<ScoredCandidate>,
    pub reasoning: String,
    pub estimated_cost: CostBand,
    pub timeline: String,
    pub risk_level: RiskLevel,
    pub team_composition: TeamComposition,
}
