//! Hybrid retrieval scoring.
//!
//! Each candidate gets five sub-scores (semantic, keyword, proximity,
//! domain, budget penalty) that are combined by a fixed weighted sum. The
//! evidence, boosts and penalties attached to a score explain it; they never
//! feed back into `total_score`.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, warn};

use super::candidate::CandidateEmbedding;
use super::embeddings::{EmbeddingSource, cosine_similarity};
use super::signals;
use crate::config::ScoringConfig;
use crate::profile::CandidateProfile;
use crate::requirements::{Category, Domain, Requirement};
use crate::text::{fold, significant_terms};

/// Weight, in tenths, of each kind of keyword hit.
const ROLE_HIT: usize = 3;
const SKILL_HIT: usize = 2;
const TAG_HIT: usize = 1;
const TERM_HIT: usize = 1;

/// Below this location fit the candidate is flagged as a location mismatch.
const LOCATION_MISMATCH_BELOW: f64 = 0.7;

/// The query side of a search, embedded once.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryEmbedding {
    pub vector: Vec<f32>,
    pub text: String,
    pub requirement: Requirement,
    pub source: EmbeddingSource,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubScores {
    pub semantic: f64,
    pub keyword: f64,
    pub proximity: f64,
    pub domain: f64,
    pub budget_penalty: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreEvidence {
    pub matched_roles: Vec<String>,
    pub matched_skills: Vec<String>,
    pub matched_tags: Vec<String>,
    pub matched_terms: Vec<String>,
    pub relationship: f64,
    pub availability: f64,
    pub location_fit: f64,
    pub reasons: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBoosts {
    pub exact_role_match: bool,
    pub exact_skill_match: bool,
    pub high_relationship: bool,
    pub domain_expertise: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScorePenalties {
    pub location_mismatch: bool,
    pub budget_mismatch: bool,
    pub availability_mismatch: bool,
    pub language_mismatch: bool,
}

/// One candidate's ranking entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RetrievalScore {
    pub candidate_id: String,
    pub candidate_name: String,
    pub total_score: f64,
    pub sub_scores: SubScores,
    pub evidence: ScoreEvidence,
    pub boosts: ScoreBoosts,
    pub penalties: ScorePenalties,
}

/// Scores candidates against one query under one immutable config.
#[derive(Debug, Clone, Copy, Default)]
pub struct HybridScorer {
    config: ScoringConfig,
}

impl HybridScorer {
    #[must_use]
    pub const fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score every candidate, drop those under any threshold and sort the
    /// rest by total descending. Ties keep input order.
    ///
    /// `profiles[i]` must correspond to `candidates[i]`; slices of different
    /// lengths rank nothing.
    #[must_use]
    pub fn rank(
        &self,
        query: &QueryEmbedding,
        profiles: &[CandidateProfile],
        candidates: &[CandidateEmbedding],
    ) -> Vec<RetrievalScore> {
        if profiles.len() != candidates.len() {
            warn!(
                target: "scoring",
                profiles = profiles.len(),
                embeddings = candidates.len(),
                "profile and embedding counts differ, nothing ranked"
            );
            return Vec::new();
        }
        let context = QueryContext::new(query);

        let mut ranked: Vec<RetrievalScore> = profiles
            .par_iter()
            .zip(candidates.par_iter())
            .map(|(profile, candidate)| self.score_with(&context, profile, candidate))
            .filter(|score| self.passes(&score.sub_scores))
            .collect();

        ranked.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));

        debug!(
            target: "scoring",
            scored = profiles.len(),
            kept = ranked.len(),
            "ranked candidates"
        );
        ranked
    }

    /// Score a single candidate without filtering.
    #[must_use]
    pub fn score(
        &self,
        query: &QueryEmbedding,
        profile: &CandidateProfile,
        candidate: &CandidateEmbedding,
    ) -> RetrievalScore {
        self.score_with(&QueryContext::new(query), profile, candidate)
    }

    /// True when every thresholded sub-score meets its minimum.
    #[must_use]
    pub fn passes(&self, scores: &SubScores) -> bool {
        let t = &self.config.thresholds;
        scores.semantic >= t.min_semantic
            && scores.keyword >= t.min_keyword
            && scores.proximity >= t.min_proximity
    }

    #[must_use]
    pub fn total(&self, scores: &SubScores) -> f64 {
        let w = &self.config.weights;
        w.semantic * scores.semantic
            + w.keyword * scores.keyword
            + w.proximity * scores.proximity
            + w.domain * scores.domain
            - w.budget_penalty * scores.budget_penalty
    }

    fn score_with(
        &self,
        context: &QueryContext<'_>,
        profile: &CandidateProfile,
        candidate: &CandidateEmbedding,
    ) -> RetrievalScore {
        let requirement = &context.query.requirement;
        let folded_text = candidate.folded_text();
        let items = signals::skill_items(profile);

        let matched_roles = signals::matched_roles(&requirement.roles, &candidate.roles, &folded_text);
        let matched_skills = signals::matched_skills(&requirement.skills, &items);
        let matched_tags = signals::matched_tags(&candidate.tags, &context.folded_description);
        let matched_terms = signals::matched_terms(&context.terms, &folded_text);

        let relationship = profile.relationship();
        let availability = signals::availability(profile);
        let location_fit = signals::location_fit(&candidate.locations, requirement);
        let budget_penalty = signals::budget_penalty(relationship, requirement.budget);

        let sub_scores = SubScores {
            semantic: semantic_score(&context.query.vector, candidate),
            keyword: keyword_score(
                matched_roles.len(),
                matched_skills.len(),
                matched_tags.len(),
                matched_terms.len(),
            ),
            proximity: signals::proximity(relationship, availability, location_fit).clamp(0.0, 1.0),
            domain: domain_score(requirement.domain, candidate.domain),
            budget_penalty,
        };

        let boosts = ScoreBoosts {
            exact_role_match: signals::exact_role_match(&requirement.roles, &candidate.roles),
            exact_skill_match: signals::exact_skill_match(&requirement.skills, &items),
            high_relationship: relationship >= signals::HIGH_RELATIONSHIP,
            domain_expertise: requirement.domain != Domain::General
                && candidate.domain == requirement.domain,
        };
        let penalties = ScorePenalties {
            location_mismatch: location_fit < LOCATION_MISMATCH_BELOW,
            budget_mismatch: budget_penalty > 0.0,
            availability_mismatch: availability < signals::NEUTRAL_AVAILABILITY,
            language_mismatch: signals::language_mismatch(&requirement.languages, &profile.languages),
        };

        let mut evidence = ScoreEvidence {
            matched_roles,
            matched_skills,
            matched_tags,
            matched_terms,
            relationship,
            availability,
            location_fit,
            reasons: Vec::new(),
        };
        evidence.reasons = reasons(&evidence, &boosts, &penalties, candidate.domain);

        RetrievalScore {
            candidate_id: candidate.id.clone(),
            candidate_name: profile.name.clone(),
            total_score: self.total(&sub_scores),
            sub_scores,
            evidence,
            boosts,
            penalties,
        }
    }
}

/// Per-query values shared by every candidate.
struct QueryContext<'a> {
    query: &'a QueryEmbedding,
    folded_description: String,
    terms: Vec<String>,
}

impl<'a> QueryContext<'a> {
    fn new(query: &'a QueryEmbedding) -> Self {
        let description = &query.requirement.description;
        Self {
            query,
            folded_description: fold(description),
            terms: significant_terms(description),
        }
    }
}

/// Cosine similarity clamped to `0..=1`; a mismatched dimension scores 0.
fn semantic_score(query: &[f32], candidate: &CandidateEmbedding) -> f64 {
    match cosine_similarity(query, &candidate.vector) {
        Ok(similarity) => similarity.clamp(0.0, 1.0),
        Err(err) => {
            warn!(target: "scoring", candidate = %candidate.id, error = %err, "semantic score skipped");
            0.0
        }
    }
}

/// Mean weight of the keyword hits, 0 without any.
///
/// Computed in tenths so that a single free-text hit lands exactly on 0.1.
#[must_use]
pub fn keyword_score(roles: usize, skills: usize, tags: usize, terms: usize) -> f64 {
    let hits = roles + skills + tags + terms;
    if hits == 0 {
        return 0.0;
    }
    let weighted = ROLE_HIT * roles + SKILL_HIT * skills + TAG_HIT * tags + TERM_HIT * terms;
    #[allow(clippy::cast_precision_loss)]
    let score = weighted as f64 / (10 * hits) as f64;
    score
}

/// 1 for the same domain, 0.5 when either side is general, else 0.
#[must_use]
pub fn domain_score(required: Domain, candidate: Domain) -> f64 {
    if required == candidate {
        1.0
    } else if required == Domain::General || candidate == Domain::General {
        0.5
    } else {
        0.0
    }
}

fn reasons(
    evidence: &ScoreEvidence,
    boosts: &ScoreBoosts,
    penalties: &ScorePenalties,
    domain: Domain,
) -> Vec<String> {
    let mut out = Vec::new();
    if !evidence.matched_roles.is_empty() {
        out.push(format!("fits roles: {}", evidence.matched_roles.join(", ")));
    }
    if !evidence.matched_skills.is_empty() {
        out.push(format!("has skills: {}", evidence.matched_skills.join(", ")));
    }
    if !evidence.matched_tags.is_empty() {
        out.push(format!("tags mentioned: {}", evidence.matched_tags.join(", ")));
    }
    if boosts.high_relationship {
        out.push(format!("close relationship ({:.0}/10)", evidence.relationship));
    }
    if boosts.domain_expertise {
        out.push(format!("works in {}", domain.name()));
    }
    if penalties.availability_mismatch {
        out.push("appears busy".to_string());
    }
    if penalties.location_mismatch {
        out.push("location may not suit".to_string());
    }
    if penalties.budget_mismatch {
        out.push("weak tie for a tight budget".to_string());
    }
    if penalties.language_mismatch {
        out.push("no requested language listed".to_string());
    }
    out
}
