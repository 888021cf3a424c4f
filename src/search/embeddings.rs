//! Embedding capability and the deterministic local embedder.
//!
//! [`HashEmbedder`] is the fallback for every remote failure. Its vectors are
//! reproducible (same text, same vector) but carry no semantic meaning:
//! two paraphrases land far apart. Threshold-based filtering on the
//! semantic score therefore drops most candidates when the fallback is in
//! use, and callers can tell which mode produced a vector from
//! [`EmbeddingSource`].

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoutError};

/// Dimension used by both providers unless configured otherwise.
pub const DEFAULT_DIMENSIONS: usize = 768;

/// Scale applied to the hash seed before the sine projection.
const PROJECTION_SCALE: f64 = 0.001;

/// Where a vector came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingSource {
    Remote,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Embedding {
    pub vector: Vec<f32>,
    pub source: EmbeddingSource,
}

impl Embedding {
    #[must_use]
    pub const fn remote(vector: Vec<f32>) -> Self {
        Self {
            vector,
            source: EmbeddingSource::Remote,
        }
    }

    #[must_use]
    pub const fn fallback(vector: Vec<f32>) -> Self {
        Self {
            vector,
            source: EmbeddingSource::Fallback,
        }
    }

    #[must_use]
    pub fn is_remote(&self) -> bool {
        self.source == EmbeddingSource::Remote
    }
}

/// Text to vector. Implementations never fail: a provider that cannot reach
/// its backend answers from [`HashEmbedder`] instead.
pub trait EmbeddingProvider: Send + Sync + Debug {
    fn embed(&self, text: &str) -> Embedding;

    /// One embedding per input, in input order.
    fn embed_batch(&self, texts: &[String]) -> Vec<Embedding> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    fn dimensions(&self) -> usize;

    fn name(&self) -> &'static str;
}

/// Rolling-hash embedder projected through a fixed trigonometric transform.
#[derive(Debug, Clone, Copy)]
pub struct HashEmbedder {
    dim: usize,
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self {
            dim: DEFAULT_DIMENSIONS,
        }
    }
}

impl HashEmbedder {
    /// Create embedder with specified dimension (at least 1).
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self { dim: dim.max(1) }
    }

    /// `h = h * 31 + byte` over the UTF-8 bytes, wrapping at 32 bits.
    #[must_use]
    pub fn rolling_hash(text: &str) -> u32 {
        text.bytes()
            .fold(0u32, |hash, byte| hash.wrapping_mul(31).wrapping_add(u32::from(byte)))
    }

    /// Embed text into an L2-normalised vector.
    #[must_use]
    pub fn embed_vector(&self, text: &str) -> Vec<f32> {
        // Offset by one so the empty string still projects to a non-zero vector.
        let seed = f64::from(Self::rolling_hash(text)) + 1.0;
        let mut vector: Vec<f32> = (1..=self.dim)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let k = i as f64;
                #[allow(clippy::cast_possible_truncation)]
                let value = ((seed * k * PROJECTION_SCALE).sin() * (seed / k).cos()) as f32;
                value
            })
            .collect();
        normalize(&mut vector);
        vector
    }
}

impl EmbeddingProvider for HashEmbedder {
    fn embed(&self, text: &str) -> Embedding {
        Embedding::fallback(self.embed_vector(text))
    }

    fn dimensions(&self) -> usize {
        self.dim
    }

    fn name(&self) -> &'static str {
        "hash"
    }
}

/// Scale `vector` to unit length in place; zero vectors are left alone.
pub fn normalize(vector: &mut [f32]) {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for value in vector.iter_mut() {
            *value /= norm;
        }
    }
}

/// `dot(a, b) / (|a| * |b|)`, or 0 when either vector has zero magnitude.
///
/// Accumulates in `f64`; the result is exactly symmetric in its arguments.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64> {
    if a.len() != b.len() {
        return Err(ScoutError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b.iter()) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot / (norm_a.sqrt() * norm_b.sqrt()))
    }
}
