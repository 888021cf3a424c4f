//! Remote embedding provider for OpenAI-compatible `/embeddings` APIs.
//!
//! Every failure (transport error, timeout, non-success status, malformed
//! body, wrong vector count or dimension) is logged and answered from the
//! local [`HashEmbedder`] for the affected chunk. Nothing is retried.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::embeddings::{Embedding, EmbeddingProvider, HashEmbedder};
use crate::config::{EmbeddingConfig, MAX_EMBEDDING_BATCH};
use crate::error::{Result, ScoutError};

#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    dimensions: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    #[serde(default)]
    index: usize,
}

#[derive(Debug)]
pub struct RemoteEmbedder {
    client: Client,
    endpoint: String,
    model: String,
    dimensions: usize,
    batch_size: usize,
    fallback: HashEmbedder,
}

impl RemoteEmbedder {
    /// Build the HTTP client. Fails only on an unusable key or client setup.
    pub fn new(config: &EmbeddingConfig, api_key: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = api_key {
            let value = HeaderValue::from_str(&format!("Bearer {key}"))
                .map_err(|err| ScoutError::Config(format!("embedding api key: {err}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .default_headers(headers)
            .build()
            .map_err(|err| ScoutError::Config(format!("embedding http client: {err}")))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            dimensions: config.dimensions.max(1),
            batch_size: config.batch_size.clamp(1, MAX_EMBEDDING_BATCH),
            fallback: HashEmbedder::new(config.dimensions),
        })
    }

    fn request_chunk(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let request = EmbeddingRequest {
            model: &self.model,
            input: texts,
            // Only the text-embedding-3 family accepts a requested size.
            dimensions: self
                .model
                .contains("text-embedding-3")
                .then_some(self.dimensions),
        };

        debug!(target: "embedding", endpoint = %self.endpoint, texts = texts.len(), "remote embedding request");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .map_err(|err| ScoutError::ProviderUnavailable(format!("request failed: {err}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScoutError::ProviderUnavailable(format!("HTTP {status}")));
        }

        let body: EmbeddingResponse = response
            .json()
            .map_err(|err| ScoutError::ProviderUnavailable(format!("response parse: {err}")))?;

        if body.data.len() != texts.len() {
            return Err(ScoutError::ProviderUnavailable(format!(
                "expected {} embeddings, got {}",
                texts.len(),
                body.data.len()
            )));
        }

        let mut data = body.data;
        data.sort_by_key(|item| item.index);
        data.into_iter()
            .map(|item| {
                if item.embedding.len() == self.dimensions {
                    Ok(item.embedding)
                } else {
                    Err(ScoutError::ProviderUnavailable(format!(
                        "expected {} dimensions, got {}",
                        self.dimensions,
                        item.embedding.len()
                    )))
                }
            })
            .collect()
    }
}

impl EmbeddingProvider for RemoteEmbedder {
    fn embed(&self, text: &str) -> Embedding {
        self.embed_batch(&[text.to_string()])
            .pop()
            .unwrap_or_else(|| self.fallback.embed(text))
    }

    fn embed_batch(&self, texts: &[String]) -> Vec<Embedding> {
        let mut out = Vec::with_capacity(texts.len());
        for chunk in texts.chunks(self.batch_size) {
            match self.request_chunk(chunk) {
                Ok(vectors) => out.extend(vectors.into_iter().map(Embedding::remote)),
                Err(err) => {
                    warn!(
                        target: "embedding",
                        error = %err,
                        texts = chunk.len(),
                        "remote embedding failed, using local fallback"
                    );
                    out.extend(chunk.iter().map(|text| self.fallback.embed(text)));
                }
            }
        }
        out
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}
