//! Candidate profiles as supplied by the contact store.
//!
//! Profiles are read-only input. Every field is optional on the wire so a
//! sparse export from the address book still deserializes.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Upper bound of the relationship-strength scale.
pub const MAX_RELATIONSHIP_STRENGTH: f64 = 10.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CandidateProfile {
    pub id: String,
    pub name: String,
    pub profession: String,
    pub company: String,
    pub location: String,
    pub skills: Vec<String>,
    pub services: Vec<String>,
    pub expertise: Vec<String>,
    pub tags: Vec<String>,
    pub languages: Vec<String>,
    /// 0 (stranger) to 10 (close collaborator).
    pub relationship_strength: f64,
    pub notes: String,
}

impl CandidateProfile {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// Relationship strength clamped to `0..=10`; NaN reads as 0.
    #[must_use]
    pub fn relationship(&self) -> f64 {
        if self.relationship_strength.is_nan() {
            return 0.0;
        }
        self.relationship_strength.clamp(0.0, MAX_RELATIONSHIP_STRENGTH)
    }

    /// SHA-256 over a canonical rendering of every field.
    ///
    /// Two profiles with identical content hash identically regardless of
    /// where they came from, which makes this the key for any embedding
    /// cache placed in front of the provider.
    #[must_use]
    pub fn content_hash(&self) -> String {
        let mut hasher = Sha256::new();
        for field in [
            &self.id,
            &self.name,
            &self.profession,
            &self.company,
            &self.location,
            &self.notes,
        ] {
            hasher.update(field.as_bytes());
            hasher.update([0u8]);
        }
        for list in [
            &self.skills,
            &self.services,
            &self.expertise,
            &self.tags,
            &self.languages,
        ] {
            for item in list {
                hasher.update(item.as_bytes());
                hasher.update([0x1f]);
            }
            hasher.update([0u8]);
        }
        hasher.update(self.relationship().to_bits().to_le_bytes());
        hex::encode(hasher.finalize())
    }

    /// The profile id, or its content hash when the store left it blank.
    #[must_use]
    pub fn effective_id(&self) -> String {
        if self.id.trim().is_empty() {
            self.content_hash()
        } else {
            self.id.clone()
        }
    }

    /// Notes and tags joined; the source for the availability heuristic.
    #[must_use]
    pub fn status_text(&self) -> String {
        let mut parts = vec![self.notes.as_str()];
        parts.extend(self.tags.iter().map(String::as_str));
        parts.join(" ")
    }

    #[must_use]
    pub fn with_profession(mut self, profession: impl Into<String>) -> Self {
        self.profession = profession.into();
        self
    }

    #[must_use]
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    #[must_use]
    pub fn with_skills(mut self, skills: &[&str]) -> Self {
        self.skills = skills.iter().map(|s| (*s).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_services(mut self, services: &[&str]) -> Self {
        self.services = services.iter().map(|s| (*s).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_expertise(mut self, expertise: &[&str]) -> Self {
        self.expertise = expertise.iter().map(|s| (*s).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|s| (*s).to_string()).collect();
        self
    }

    #[must_use]
    pub fn with_languages(mut self, languages: &[&str]) -> Self {
        self.languages = languages.iter().map(|s| (*s).to_string()).collect();
        self
    }

    #[must_use]
    pub const fn with_relationship(mut self, strength: f64) -> Self {
        self.relationship_strength = strength;
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}
