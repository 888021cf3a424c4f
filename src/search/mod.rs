//! Candidate retrieval.
//!
//! Hybrid ranking: embedding similarity + keyword evidence + relationship
//! proximity + domain alignment, minus a budget penalty.

pub mod candidate;
pub mod embeddings;
pub mod engine;
pub mod hybrid;
pub mod provider;
pub mod remote;
pub mod signals;

pub use candidate::{CandidateEmbedder, CandidateEmbedding};
pub use embeddings::{Embedding, EmbeddingProvider, EmbeddingSource, HashEmbedder, cosine_similarity};
pub use engine::{SearchEngine, SearchMetadata, SearchRequest, SearchResponse, TeamSearchResponse};
pub use hybrid::{HybridScorer, QueryEmbedding, RetrievalScore, SubScores};
pub use provider::create_provider;
pub use remote::RemoteEmbedder;
