use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoutError};

/// Largest chunk the remote embedding provider accepts per request.
pub const MAX_EMBEDDING_BATCH: usize = 100;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub embedding: EmbeddingConfig,
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub team: TeamConfig,
}

impl Config {
    /// Defaults, then the global and project files (or only the explicit
    /// file), then `TEAMSCOUT_*` environment overrides.
    pub fn load(explicit_path: Option<&Path>, project_root: &Path) -> Result<Self> {
        let mut config = Self::default();

        let explicit = explicit_path
            .map(PathBuf::from)
            .or_else(|| std::env::var("TEAMSCOUT_CONFIG").ok().map(PathBuf::from));

        if let Some(path) = explicit {
            let patch = Self::load_patch(&path)?.ok_or_else(|| {
                ScoutError::MissingConfig(format!("config file not found: {}", path.display()))
            })?;
            config.merge_patch(patch);
        } else {
            if let Some(global) = Self::load_global()? {
                config.merge_patch(global);
            }
            if let Some(project) = Self::load_project(project_root)? {
                config.merge_patch(project);
            }
        }

        config.apply_env_overrides()?;
        config.validate()?;

        Ok(config)
    }

    /// Parse a complete config from TOML text, layering it over defaults.
    pub fn from_toml(raw: &str) -> Result<Self> {
        let patch: ConfigPatch = toml::from_str(raw)
            .map_err(|err| ScoutError::Config(format!("parse config: {err}")))?;
        let mut config = Self::default();
        config.merge_patch(patch);
        config.validate()?;
        Ok(config)
    }

    fn load_global() -> Result<Option<ConfigPatch>> {
        let Some(dir) = dirs::config_dir() else {
            return Ok(None);
        };
        Self::load_patch(&dir.join("teamscout/config.toml"))
    }

    fn load_project(project_root: &Path) -> Result<Option<ConfigPatch>> {
        let path = project_root.join("teamscout.toml");
        Self::load_patch(&path)
    }

    fn load_patch(path: &Path) -> Result<Option<ConfigPatch>> {
        if !path.exists() {
            return Ok(None);
        }

        let raw = std::fs::read_to_string(path)
            .map_err(|err| ScoutError::Config(format!("read config {}: {err}", path.display())))?;
        let patch = toml::from_str(&raw)
            .map_err(|err| ScoutError::Config(format!("parse config {}: {err}", path.display())))?;
        Ok(Some(patch))
    }

    fn merge_patch(&mut self, patch: ConfigPatch) {
        if let Some(patch) = patch.scoring {
            self.scoring = self.scoring.merged(&patch);
        }
        if let Some(patch) = patch.embedding {
            self.embedding.merge(patch);
        }
        if let Some(patch) = patch.profile {
            self.profile.merge(patch);
        }
        if let Some(patch) = patch.team {
            self.team.merge(patch);
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        let weights = &mut self.scoring.weights;
        if let Some(value) = env_f64("TEAMSCOUT_SCORING_WEIGHT_SEMANTIC")? {
            weights.semantic = value;
        }
        if let Some(value) = env_f64("TEAMSCOUT_SCORING_WEIGHT_KEYWORD")? {
            weights.keyword = value;
        }
        if let Some(value) = env_f64("TEAMSCOUT_SCORING_WEIGHT_PROXIMITY")? {
            weights.proximity = value;
        }
        if let Some(value) = env_f64("TEAMSCOUT_SCORING_WEIGHT_DOMAIN")? {
            weights.domain = value;
        }
        if let Some(value) = env_f64("TEAMSCOUT_SCORING_WEIGHT_BUDGET_PENALTY")? {
            weights.budget_penalty = value;
        }

        let thresholds = &mut self.scoring.thresholds;
        if let Some(value) = env_f64("TEAMSCOUT_SCORING_MIN_SEMANTIC")? {
            thresholds.min_semantic = value;
        }
        if let Some(value) = env_f64("TEAMSCOUT_SCORING_MIN_KEYWORD")? {
            thresholds.min_keyword = value;
        }
        if let Some(value) = env_f64("TEAMSCOUT_SCORING_MIN_PROXIMITY")? {
            thresholds.min_proximity = value;
        }

        if let Some(value) = env_string("TEAMSCOUT_EMBEDDING_BACKEND") {
            self.embedding.backend = parse_backend(&value)?;
        }
        if let Some(value) = env_string("TEAMSCOUT_EMBEDDING_ENDPOINT") {
            self.embedding.endpoint = value;
        }
        if let Some(value) = env_string("TEAMSCOUT_EMBEDDING_MODEL") {
            self.embedding.model = value;
        }
        if let Some(value) = env_usize("TEAMSCOUT_EMBEDDING_DIMENSIONS")? {
            self.embedding.dimensions = value;
        }
        if let Some(value) = env_u64("TEAMSCOUT_EMBEDDING_TIMEOUT_SECS")? {
            self.embedding.timeout_secs = value;
        }
        if let Some(value) = env_usize("TEAMSCOUT_EMBEDDING_BATCH_SIZE")? {
            self.embedding.batch_size = value;
        }

        if let Some(value) = env_usize("TEAMSCOUT_PROFILE_FIELD_REPETITION")? {
            self.profile.field_repetition = value;
        }

        if let Some(value) = env_usize("TEAMSCOUT_TEAM_DEFAULT_SIZE")? {
            self.team.default_size = value;
        }
        if let Some(value) = env_usize("TEAMSCOUT_TEAM_MAX_SIZE")? {
            self.team.max_size = value;
        }

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()?;
        if self.embedding.dimensions == 0 {
            return Err(ScoutError::Config(
                "embedding.dimensions must be positive".to_string(),
            ));
        }
        if !(1..=MAX_EMBEDDING_BATCH).contains(&self.embedding.batch_size) {
            return Err(ScoutError::Config(format!(
                "embedding.batch_size must be within 1..={MAX_EMBEDDING_BATCH}, got {}",
                self.embedding.batch_size
            )));
        }
        if self.team.default_size == 0 || self.team.max_size == 0 {
            return Err(ScoutError::Config("team sizes must be positive".to_string()));
        }
        Ok(())
    }
}

/// Weights and thresholds for one retrieval call.
///
/// Passed by value into every scoring call; nothing in the engine keeps a
/// mutable copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    #[serde(default)]
    pub weights: ScoringWeights,
    #[serde(default)]
    pub thresholds: ScoringThresholds,
}

impl ScoringConfig {
    /// A copy with every field present in `patch` replaced.
    #[must_use]
    pub fn merged(&self, patch: &ScoringPatch) -> Self {
        let mut out = *self;
        if let Some(weights) = &patch.weights {
            if let Some(value) = weights.semantic {
                out.weights.semantic = value;
            }
            if let Some(value) = weights.keyword {
                out.weights.keyword = value;
            }
            if let Some(value) = weights.proximity {
                out.weights.proximity = value;
            }
            if let Some(value) = weights.domain {
                out.weights.domain = value;
            }
            if let Some(value) = weights.budget_penalty {
                out.weights.budget_penalty = value;
            }
        }
        if let Some(thresholds) = &patch.thresholds {
            if let Some(value) = thresholds.min_semantic {
                out.thresholds.min_semantic = value;
            }
            if let Some(value) = thresholds.min_keyword {
                out.thresholds.min_keyword = value;
            }
            if let Some(value) = thresholds.min_proximity {
                out.thresholds.min_proximity = value;
            }
        }
        out
    }

    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        for (name, value) in [
            ("semantic", w.semantic),
            ("keyword", w.keyword),
            ("proximity", w.proximity),
            ("domain", w.domain),
            ("budget_penalty", w.budget_penalty),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ScoutError::Config(format!(
                    "scoring.weights.{name} must be a non-negative number, got {value}"
                )));
            }
        }
        let t = &self.thresholds;
        for (name, value) in [
            ("min_semantic", t.min_semantic),
            ("min_keyword", t.min_keyword),
            ("min_proximity", t.min_proximity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ScoutError::Config(format!(
                    "scoring.thresholds.{name} must be within 0..=1, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub semantic: f64,
    pub keyword: f64,
    pub proximity: f64,
    pub domain: f64,
    /// Subtracted, not added.
    pub budget_penalty: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            semantic: 0.45,
            keyword: 0.20,
            proximity: 0.20,
            domain: 0.10,
            budget_penalty: 0.05,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringThresholds {
    pub min_semantic: f64,
    pub min_keyword: f64,
    pub min_proximity: f64,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            min_semantic: 0.3,
            min_keyword: 0.1,
            min_proximity: 0.2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingBackend {
    /// Remote when an API key is configured, local otherwise.
    #[default]
    Auto,
    Remote,
    Local,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub backend: EmbeddingBackend,
    pub endpoint: String,
    pub model: String,
    pub dimensions: usize,
    /// Inline key; prefer `api_key_env` outside of tests.
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub api_key_env: String,
    pub timeout_secs: u64,
    pub batch_size: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            backend: EmbeddingBackend::Auto,
            endpoint: "https://api.openai.com/v1/embeddings".to_string(),
            model: "text-embedding-3-small".to_string(),
            dimensions: 768,
            api_key: None,
            api_key_env: "TEAMSCOUT_EMBEDDING_API_KEY".to_string(),
            timeout_secs: 10,
            batch_size: MAX_EMBEDDING_BATCH,
        }
    }
}

impl EmbeddingConfig {
    /// The inline key, else the variable named by `api_key_env`.
    #[must_use]
    pub fn resolve_api_key(&self) -> Option<String> {
        self.api_key
            .clone()
            .or_else(|| env_string(&self.api_key_env))
            .filter(|key| !key.trim().is_empty())
    }

    fn merge(&mut self, patch: EmbeddingPatch) {
        if let Some(value) = patch.backend {
            self.backend = value;
        }
        if let Some(value) = patch.endpoint {
            self.endpoint = value;
        }
        if let Some(value) = patch.model {
            self.model = value;
        }
        if let Some(value) = patch.dimensions {
            self.dimensions = value;
        }
        if let Some(value) = patch.api_key {
            self.api_key = Some(value);
        }
        if let Some(value) = patch.api_key_env {
            self.api_key_env = value;
        }
        if let Some(value) = patch.timeout_secs {
            self.timeout_secs = value;
        }
        if let Some(value) = patch.batch_size {
            self.batch_size = value;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// How many times expertise and services are repeated in the text that
    /// gets embedded.
    pub field_repetition: usize,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self { field_repetition: 3 }
    }
}

impl ProfileConfig {
    fn merge(&mut self, patch: ProfilePatch) {
        if let Some(value) = patch.field_repetition {
            self.field_repetition = value;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamConfig {
    pub default_size: usize,
    pub max_size: usize,
}

impl Default for TeamConfig {
    fn default() -> Self {
        Self {
            default_size: 3,
            max_size: 12,
        }
    }
}

impl TeamConfig {
    fn merge(&mut self, patch: TeamPatch) {
        if let Some(value) = patch.default_size {
            self.default_size = value;
        }
        if let Some(value) = patch.max_size {
            self.max_size = value;
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ConfigPatch {
    pub scoring: Option<ScoringPatch>,
    pub embedding: Option<EmbeddingPatch>,
    pub profile: Option<ProfilePatch>,
    pub team: Option<TeamPatch>,
}

/// Partial scoring override; absent fields keep their current value.
///
/// Field names are camelCase on the wire; TOML files use the snake_case
/// aliases. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ScoringPatch {
    #[serde(default)]
    pub weights: Option<WeightsPatch>,
    #[serde(default)]
    pub thresholds: Option<ThresholdsPatch>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct WeightsPatch {
    pub semantic: Option<f64>,
    pub keyword: Option<f64>,
    pub proximity: Option<f64>,
    pub domain: Option<f64>,
    #[serde(alias = "budget_penalty")]
    pub budget_penalty: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ThresholdsPatch {
    #[serde(alias = "min_semantic")]
    pub min_semantic: Option<f64>,
    #[serde(alias = "min_keyword")]
    pub min_keyword: Option<f64>,
    #[serde(alias = "min_proximity")]
    pub min_proximity: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EmbeddingPatch {
    pub backend: Option<EmbeddingBackend>,
    pub endpoint: Option<String>,
    pub model: Option<String>,
    pub dimensions: Option<usize>,
    pub api_key: Option<String>,
    pub api_key_env: Option<String>,
    pub timeout_secs: Option<u64>,
    pub batch_size: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct ProfilePatch {
    pub field_repetition: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct TeamPatch {
    pub default_size: Option<usize>,
    pub max_size: Option<usize>,
}

fn parse_backend(value: &str) -> Result<EmbeddingBackend> {
    match value.to_lowercase().as_str() {
        "auto" => Ok(EmbeddingBackend::Auto),
        "remote" | "http" => Ok(EmbeddingBackend::Remote),
        "local" | "hash" => Ok(EmbeddingBackend::Local),
        _ => Err(ScoutError::Config(format!(
            "invalid embedding backend {value} (expected auto|remote|local)"
        ))),
    }
}

fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

fn env_usize(key: &str) -> Result<Option<usize>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<usize>().map(Some).map_err(|err| {
            ScoutError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<u64>().map(Some).map_err(|err| {
            ScoutError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}

fn env_f64(key: &str) -> Result<Option<f64>> {
    match std::env::var(key) {
        Ok(value) => value.parse::<f64>().map(Some).map_err(|err| {
            ScoutError::Config(format!("invalid {key} value {value}: {err}"))
        }),
        Err(_) => Ok(None),
    }
}
