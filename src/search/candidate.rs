//! Candidate profile to embedding.
//!
//! The embedded text repeats the curated fields (expertise, services) before
//! the free-text ones, so the vector leans toward what the person says they
//! do rather than toward prose in their notes.

use rayon::prelude::*;
use serde::Serialize;
use tracing::warn;

use super::embeddings::{Embedding, EmbeddingProvider, EmbeddingSource};
use crate::config::ProfileConfig;
use crate::profile::CandidateProfile;
use crate::requirements::Domain;
use crate::text::{fold, split_list};

const ROLE_SEPARATORS: &[char] = &['/', ',', '&', '|', ';'];
const LOCATION_SEPARATORS: &[char] = &[',', '/', ';'];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateEmbedding {
    pub id: String,
    pub vector: Vec<f32>,
    pub text: String,
    pub skills: Vec<String>,
    pub services: Vec<String>,
    pub expertise: Vec<String>,
    pub tags: Vec<String>,
    pub languages: Vec<String>,
    pub locations: Vec<String>,
    pub roles: Vec<String>,
    pub domain: Domain,
    pub source: EmbeddingSource,
}

impl CandidateEmbedding {
    /// Folded `text`, for term matching.
    #[must_use]
    pub fn folded_text(&self) -> String {
        fold(&self.text)
    }
}

#[derive(Debug, Clone)]
pub struct CandidateEmbedder {
    field_repetition: usize,
}

impl Default for CandidateEmbedder {
    fn default() -> Self {
        Self::new(&ProfileConfig::default())
    }
}

impl CandidateEmbedder {
    #[must_use]
    pub fn new(config: &ProfileConfig) -> Self {
        Self {
            field_repetition: config.field_repetition.max(1),
        }
    }

    /// Expertise and services repeated `field_repetition` times each, then
    /// profession, company, skills, tags, languages, location and notes.
    #[must_use]
    pub fn build_text(&self, profile: &CandidateProfile) -> String {
        let mut parts: Vec<String> = Vec::new();

        for list in [&profile.expertise, &profile.services] {
            if list.is_empty() {
                continue;
            }
            let joined = list.join(", ");
            parts.extend(std::iter::repeat_n(joined, self.field_repetition));
        }

        for field in [&profile.profession, &profile.company] {
            if !field.trim().is_empty() {
                parts.push(field.trim().to_string());
            }
        }
        for list in [&profile.skills, &profile.tags, &profile.languages] {
            if !list.is_empty() {
                parts.push(list.join(", "));
            }
        }
        for field in [&profile.location, &profile.notes] {
            if !field.trim().is_empty() {
                parts.push(field.trim().to_string());
            }
        }

        parts.join("\n")
    }

    /// Roles named by the profession field ("Designer / Illustrator").
    #[must_use]
    pub fn roles_of(profile: &CandidateProfile) -> Vec<String> {
        split_list(&profile.profession, ROLE_SEPARATORS)
    }

    #[must_use]
    pub fn locations_of(profile: &CandidateProfile) -> Vec<String> {
        split_list(&profile.location, LOCATION_SEPARATORS)
    }

    /// Embed a single profile.
    pub fn embed(&self, profile: &CandidateProfile, provider: &dyn EmbeddingProvider) -> CandidateEmbedding {
        let text = self.build_text(profile);
        let embedding = provider.embed(&text);
        Self::assemble(profile, text, embedding)
    }

    /// Embed every profile with a single batch call, preserving input order.
    pub fn embed_all(
        &self,
        profiles: &[CandidateProfile],
        provider: &dyn EmbeddingProvider,
    ) -> Vec<CandidateEmbedding> {
        let texts: Vec<String> = profiles
            .par_iter()
            .map(|profile| self.build_text(profile))
            .collect();
        let mut embeddings = provider.embed_batch(&texts);
        if embeddings.len() != texts.len() {
            warn!(
                target: "embedding",
                provider = provider.name(),
                expected = texts.len(),
                got = embeddings.len(),
                "batch size mismatch, embedding one by one"
            );
            embeddings = texts.iter().map(|text| provider.embed(text)).collect();
        }

        profiles
            .par_iter()
            .zip(texts.into_par_iter())
            .zip(embeddings.into_par_iter())
            .map(|((profile, text), embedding)| Self::assemble(profile, text, embedding))
            .collect()
    }

    fn assemble(profile: &CandidateProfile, text: String, embedding: Embedding) -> CandidateEmbedding {
        let domain = Domain::detect(&fold(&text));
        CandidateEmbedding {
            id: profile.effective_id(),
            vector: embedding.vector,
            text,
            skills: profile.skills.clone(),
            services: profile.services.clone(),
            expertise: profile.expertise.clone(),
            tags: profile.tags.clone(),
            languages: profile.languages.clone(),
            locations: Self::locations_of(profile),
            roles: Self::roles_of(profile),
            domain,
            source: embedding.source,
        }
    }
}
