//! Error types for teamscout.
//!
//! Only pre-flight validation failures are meant to reach a caller of the
//! search pipeline. Provider failures are absorbed inside the embedding layer
//! and dimension mismatches are scored as zero for the affected candidate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoutError {
    #[error("invalid requirement: {0}")]
    InvalidRequirement(String),

    #[error("vector dimension mismatch: {left} != {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("embedding provider unavailable: {0}")]
    ProviderUnavailable(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("missing configuration: {0}")]
    MissingConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoutError>;
