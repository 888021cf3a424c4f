use std::path::PathBuf;

use tempfile::TempDir;

use crate::profile::CandidateProfile;
use crate::requirements::{Budget, Domain, LocationPreference, Requirement};
use crate::search::embeddings::{Embedding, EmbeddingProvider, EmbeddingSource, normalize};

/// Frontend developer in Istanbul, close and available.
#[must_use]
pub fn developer() -> CandidateProfile {
    CandidateProfile::new("dev", "Deniz Yilmaz")
        .with_profession("Frontend Developer")
        .with_location("Istanbul")
        .with_skills(&["react", "typescript", "node.js"])
        .with_services(&["web development"])
        .with_expertise(&["frontend", "backend apis"])
        .with_tags(&["available"])
        .with_languages(&["Turkish", "English"])
        .with_relationship(8.0)
        .with_notes("Open to work, builds web apps with React")
}

/// Designer in Ankara, currently busy.
#[must_use]
pub fn designer() -> CandidateProfile {
    CandidateProfile::new("designer", "Ayla Kaya")
        .with_profession("UI/UX Designer")
        .with_location("Ankara")
        .with_skills(&["figma", "sketch"])
        .with_services(&["branding"])
        .with_expertise(&["user research"])
        .with_tags(&["creative"])
        .with_languages(&["Turkish"])
        .with_relationship(6.0)
        .with_notes("Currently busy with an agency engagement")
}

/// Project manager in Istanbul.
#[must_use]
pub fn manager() -> CandidateProfile {
    CandidateProfile::new("manager", "Mert Demir")
        .with_profession("Project Manager")
        .with_location("Istanbul")
        .with_skills(&["scrum", "jira"])
        .with_services(&["delivery management"])
        .with_expertise(&["agile"])
        .with_languages(&["Turkish", "English"])
        .with_relationship(7.0)
        .with_notes("Available from next month")
}

/// Developer, designer and manager, in that order.
#[must_use]
pub fn seeded_pool() -> Vec<CandidateProfile> {
    vec![developer(), designer(), manager()]
}

/// The technology requirement the seeded pool is usually ranked against.
#[must_use]
pub fn technology_requirement() -> Requirement {
    Requirement::new(
        "Teknoloji projesi için react ile web uygulaması geliştirecek ekip",
        3,
    )
    .with_roles(&["Frontend Developer", "Backend Developer"])
    .with_skills(&["react"])
    .with_domain(Domain::Technology)
    .with_budget(Budget::Medium)
    .with_location(LocationPreference::Hybrid)
}

const PROFESSIONS: &[&str] = &[
    "Frontend Developer",
    "Backend Developer",
    "Data Scientist",
    "UI/UX Designer",
    "Marketing Specialist",
    "DevOps Engineer",
    "Accountant",
    "Project Manager",
];
const SKILLS: &[&str] = &[
    "react", "python", "docker", "figma", "seo", "kubernetes", "excel", "scrum", "node.js",
    "sql",
];
const CITIES: &[&str] = &["Istanbul", "Ankara", "Izmir", "Berlin", "Remote"];
const NOTES: &[&str] = &["available", "busy until spring", "", "open to work"];

/// `count` varied, deterministic candidates.
#[must_use]
pub fn generated_pool(count: usize) -> Vec<CandidateProfile> {
    (0..count)
        .map(|i| {
            let skills = [SKILLS[i % SKILLS.len()], SKILLS[(i * 3 + 1) % SKILLS.len()]];
            #[allow(clippy::cast_precision_loss)]
            let relationship = (i % 11) as f64;
            CandidateProfile::new(format!("c{i}"), format!("Candidate {i}"))
                .with_profession(PROFESSIONS[i % PROFESSIONS.len()])
                .with_location(CITIES[i % CITIES.len()])
                .with_skills(&skills)
                .with_expertise(&[SKILLS[(i + 2) % SKILLS.len()]])
                .with_relationship(relationship)
                .with_notes(NOTES[i % NOTES.len()])
        })
        .collect()
}

/// Provider that maps every text to the same unit vector.
///
/// Makes the semantic sub-score exactly 1 so tests can reason about the
/// other signals in isolation.
#[derive(Debug, Clone)]
pub struct StaticEmbedder {
    vector: Vec<f32>,
    source: EmbeddingSource,
}

impl StaticEmbedder {
    /// Tagged as a remote (semantic) provider.
    #[must_use]
    pub fn new(dim: usize) -> Self {
        let mut vector = vec![1.0; dim.max(1)];
        normalize(&mut vector);
        Self {
            vector,
            source: EmbeddingSource::Remote,
        }
    }

    #[must_use]
    pub const fn with_source(mut self, source: EmbeddingSource) -> Self {
        self.source = source;
        self
    }
}

impl EmbeddingProvider for StaticEmbedder {
    fn embed(&self, _text: &str) -> Embedding {
        Embedding {
            vector: self.vector.clone(),
            source: self.source,
        }
    }

    fn dimensions(&self) -> usize {
        self.vector.len()
    }

    fn name(&self) -> &'static str {
        "static"
    }
}

/// Isolated directory for candidate and config files.
pub struct UnitTestFixture {
    pub temp_dir: TempDir,
    pub data_path: PathBuf,
}

impl Default for UnitTestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitTestFixture {
    #[must_use]
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_path = temp_dir.path().to_path_buf();
        println!("[FIXTURE] Created temp directory: {data_path:?}");
        Self {
            temp_dir,
            data_path,
        }
    }

    /// Create a test file with content.
    #[must_use]
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let full_path = self.data_path.join(relative_path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        std::fs::write(&full_path, content).expect("Failed to write file");
        println!(
            "[FIXTURE] Created file: {:?} ({} bytes)",
            full_path,
            content.len()
        );
        full_path
    }

    /// Write `profiles` as a candidates JSON file.
    #[must_use]
    pub fn create_candidates(&self, name: &str, profiles: &[CandidateProfile]) -> PathBuf {
        let json = serde_json::to_string_pretty(profiles).expect("Failed to serialize candidates");
        self.create_file(name, &json)
    }

    /// Config that pins the local embedder, so nothing reaches the network.
    #[must_use]
    pub fn create_local_config(&self) -> PathBuf {
        self.create_file(
            "teamscout.toml",
            "[embedding]\nbackend = \"local\"\ndimensions = 64\n",
        )
    }
}

impl Drop for UnitTestFixture {
    fn drop(&mut self) {
        println!("[FIXTURE] Cleaning up temp directory: {:?}", self.data_path);
    }
}
