//! Provider selection.
//!
//! The variant is chosen once here; nothing downstream looks at keys or
//! backends again.

use std::sync::Arc;

use tracing::{info, warn};

use super::embeddings::{EmbeddingProvider, HashEmbedder};
use super::remote::RemoteEmbedder;
use crate::config::{EmbeddingBackend, EmbeddingConfig};

/// Build the embedding provider described by `config`.
///
/// `auto` uses the remote provider only when an API key resolves; `remote`
/// always does (self-hosted endpoints may not need a key). A remote client
/// that cannot even be constructed degrades to the local embedder.
#[must_use]
pub fn create_provider(config: &EmbeddingConfig) -> Arc<dyn EmbeddingProvider> {
    let api_key = config.resolve_api_key();
    let want_remote = match config.backend {
        EmbeddingBackend::Local => false,
        EmbeddingBackend::Remote => true,
        EmbeddingBackend::Auto => api_key.is_some(),
    };

    if want_remote {
        match RemoteEmbedder::new(config, api_key.as_deref()) {
            Ok(remote) => {
                info!(
                    target: "embedding",
                    endpoint = %config.endpoint,
                    model = %config.model,
                    dimensions = config.dimensions,
                    "using remote embedding provider"
                );
                return Arc::new(remote);
            }
            Err(err) => {
                warn!(target: "embedding", error = %err, "remote provider unavailable, using local embedder");
            }
        }
    } else {
        info!(
            target: "embedding",
            dimensions = config.dimensions,
            "using local hash embedder (not semantic)"
        );
    }

    Arc::new(HashEmbedder::new(config.dimensions))
}
