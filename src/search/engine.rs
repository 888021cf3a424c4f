//! End-to-end search: description in, ranked candidates (or teams) out.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::candidate::CandidateEmbedder;
use super::embeddings::{EmbeddingProvider, EmbeddingSource};
use super::hybrid::{HybridScorer, QueryEmbedding, RetrievalScore};
use super::provider::create_provider;
use crate::config::{Config, ScoringConfig, ScoringPatch};
use crate::error::{Result, ScoutError};
use crate::profile::CandidateProfile;
use crate::requirements::{Requirement, RequirementExtractor};
use crate::team::{ScoredCandidate, TeamAssembler, TeamRecommendation};

/// One search call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub description: String,
    #[serde(default)]
    pub candidates: Vec<CandidateProfile>,
    /// Partial override of the engine's scoring config for this call.
    #[serde(default)]
    pub config: Option<ScoringPatch>,
    /// Overrides any size stated in the description.
    #[serde(default)]
    pub team_size: Option<i64>,
}

impl SearchRequest {
    #[must_use]
    pub fn new(description: impl Into<String>, candidates: Vec<CandidateProfile>) -> Self {
        Self {
            description: description.into(),
            candidates,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_team_size(mut self, team_size: i64) -> Self {
        self.team_size = Some(team_size);
        self
    }

    #[must_use]
    pub fn with_config(mut self, patch: ScoringPatch) -> Self {
        self.config = Some(patch);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchMetadata {
    pub total_candidates: usize,
    pub filtered_candidates: usize,
    pub retrieval_time_ms: u64,
    /// True only when the query and every candidate were embedded remotely.
    pub semantic_search_used: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub requirement: Requirement,
    pub recommendations: Vec<RetrievalScore>,
    pub metadata: SearchMetadata,
}

/// Teams built from a search, with the search they came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSearchResponse {
    pub requirement: Requirement,
    pub teams: Vec<TeamRecommendation>,
    pub metadata: SearchMetadata,
}

#[derive(Debug, Clone)]
pub struct SearchEngine {
    provider: Arc<dyn EmbeddingProvider>,
    extractor: RequirementExtractor,
    embedder: CandidateEmbedder,
    scoring: ScoringConfig,
    assembler: TeamAssembler,
}

impl SearchEngine {
    #[must_use]
    pub fn new(provider: Arc<dyn EmbeddingProvider>, config: &Config) -> Self {
        Self {
            provider,
            extractor: RequirementExtractor::new(&config.team),
            embedder: CandidateEmbedder::new(&config.profile),
            scoring: config.scoring,
            assembler: TeamAssembler,
        }
    }

    /// Engine with the provider selected by `config.embedding`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(create_provider(&config.embedding), config)
    }

    #[must_use]
    pub fn provider(&self) -> &dyn EmbeddingProvider {
        self.provider.as_ref()
    }

    #[must_use]
    pub const fn extractor(&self) -> &RequirementExtractor {
        &self.extractor
    }

    #[must_use]
    pub const fn assembler(&self) -> &TeamAssembler {
        &self.assembler
    }

    #[must_use]
    pub const fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    /// The engine's scoring config with `patch` applied and validated.
    pub fn scoring_for(&self, patch: Option<&ScoringPatch>) -> Result<ScoringConfig> {
        let Some(patch) = patch else {
            return Ok(self.scoring);
        };
        let merged = self.scoring.merged(patch);
        merged
            .validate()
            .map_err(|err| ScoutError::Config(format!("search config override: {err}")))?;
        Ok(merged)
    }

    /// Extract the requirement, then rank. Fails only before scoring starts.
    pub fn search(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let requirement = self
            .extractor
            .extract(&request.description, request.team_size)?;
        let scoring = self.scoring_for(request.config.as_ref())?;
        Ok(self.search_with_requirement(requirement, &request.candidates, scoring))
    }

    /// Rank `candidates` against an already structured requirement.
    #[must_use]
    pub fn search_with_requirement(
        &self,
        requirement: Requirement,
        candidates: &[CandidateProfile],
        scoring: ScoringConfig,
    ) -> SearchResponse {
        let started = Instant::now();

        if candidates.is_empty() {
            debug!(target: "search", "no candidates supplied");
            return SearchResponse {
                requirement,
                recommendations: Vec::new(),
                metadata: SearchMetadata {
                    total_candidates: 0,
                    filtered_candidates: 0,
                    retrieval_time_ms: elapsed_ms(started),
                    semantic_search_used: false,
                },
            };
        }

        let query = self.embed_query(requirement);
        let embeddings = self.embedder.embed_all(candidates, self.provider());
        let semantic_search_used = query.source == EmbeddingSource::Remote
            && embeddings
                .iter()
                .all(|embedding| embedding.source == EmbeddingSource::Remote);

        let recommendations = HybridScorer::new(scoring).rank(&query, candidates, &embeddings);
        let metadata = SearchMetadata {
            total_candidates: candidates.len(),
            filtered_candidates: recommendations.len(),
            retrieval_time_ms: elapsed_ms(started),
            semantic_search_used,
        };

        info!(
            target: "search",
            provider = self.provider.name(),
            total = metadata.total_candidates,
            kept = metadata.filtered_candidates,
            semantic = metadata.semantic_search_used,
            elapsed_ms = metadata.retrieval_time_ms,
            "search complete"
        );

        SearchResponse {
            requirement: query.requirement,
            recommendations,
            metadata,
        }
    }

    #[must_use]
    pub fn embed_query(&self, requirement: Requirement) -> QueryEmbedding {
        let text = requirement.query_text();
        let embedding = self.provider.embed(&text);
        debug!(
            target: "search",
            source = ?embedding.source,
            dimensions = embedding.vector.len(),
            "query embedded"
        );
        QueryEmbedding {
            vector: embedding.vector,
            text,
            requirement,
            source: embedding.source,
        }
    }

    /// Search, then assemble the four strategy teams from the ranking.
    pub fn recommend_teams(&self, request: &SearchRequest) -> Result<TeamSearchResponse> {
        let response = self.search(request)?;
        let teams = self.teams_from_search(&response, &request.candidates);
        Ok(TeamSearchResponse {
            requirement: response.requirement,
            teams,
            metadata: response.metadata,
        })
    }

    /// Assemble teams from a ranking produced over `candidates`.
    #[must_use]
    pub fn teams_from_search(
        &self,
        response: &SearchResponse,
        candidates: &[CandidateProfile],
    ) -> Vec<TeamRecommendation> {
        let mut by_id: HashMap<String, &CandidateProfile> = HashMap::with_capacity(candidates.len());
        for profile in candidates {
            by_id.entry(profile.effective_id()).or_insert(profile);
        }

        let scored: Vec<ScoredCandidate> = response
            .recommendations
            .iter()
            .filter_map(|score| {
                by_id.get(&score.candidate_id).map(|profile| {
                    ScoredCandidate::from_retrieval((*profile).clone(), score, &response.requirement)
                })
            })
            .collect();

        self.assembler.assemble(&response.requirement, &scored)
    }
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}
