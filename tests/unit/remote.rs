use httpmock::prelude::*;
use serde_json::json;

use teamscout::config::{EmbeddingBackend, EmbeddingConfig};
use teamscout::search::embeddings::EmbeddingSource;
use teamscout::search::{EmbeddingProvider, HashEmbedder, RemoteEmbedder, create_provider};
use teamscout::test_utils::logging::LogCapture;

fn config(server: &MockServer, batch_size: usize) -> EmbeddingConfig {
    EmbeddingConfig {
        backend: EmbeddingBackend::Remote,
        endpoint: server.url("/v1/embeddings"),
        model: "text-embedding-3-small".to_string(),
        dimensions: 3,
        api_key: Some("sk-test".to_string()),
        timeout_secs: 5,
        batch_size,
        ..EmbeddingConfig::default()
    }
}

fn texts(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[test]
fn successful_response_is_reordered_by_index() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/embeddings")
            .header("authorization", "Bearer sk-test");
        then.status(200).json_body(json!({
            "data": [
                {"index": 1, "embedding": [0.0, 1.0, 0.0]},
                {"index": 0, "embedding": [1.0, 0.0, 0.0]}
            ]
        }));
    });

    let embedder = RemoteEmbedder::new(&config(&server, 100), Some("sk-test")).unwrap();
    let out = embedder.embed_batch(&texts(&["first", "second"]));

    mock.assert();
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].vector, vec![1.0, 0.0, 0.0]);
    assert_eq!(out[1].vector, vec![0.0, 1.0, 0.0]);
    assert!(out.iter().all(|e| e.source == EmbeddingSource::Remote));
}

#[test]
fn server_error_falls_back_to_hash_embedding() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/embeddings");
        then.status(500).body("upstream exploded");
    });

    let embedder = RemoteEmbedder::new(&config(&server, 100), Some("sk-test")).unwrap();
    let (out, logs) = LogCapture::run(|| embedder.embed_batch(&texts(&["react developer"])));

    assert_eq!(out[0].source, EmbeddingSource::Fallback);
    assert_eq!(out[0].vector, HashEmbedder::new(3).embed_vector("react developer"));
    assert!(logs.contains("embedding", "remote embedding failed, using local fallback"));
}

#[test]
fn malformed_body_falls_back() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/embeddings");
        then.status(200).body("{not json");
    });

    let embedder = RemoteEmbedder::new(&config(&server, 100), None).unwrap();
    let embedding = embedder.embed("designer");
    assert_eq!(embedding.source, EmbeddingSource::Fallback);
    assert_eq!(embedding.vector.len(), 3);
}

#[test]
fn wrong_dimension_falls_back() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/embeddings");
        then.status(200)
            .json_body(json!({"data": [{"index": 0, "embedding": [1.0, 0.0]}]}));
    });

    let embedder = RemoteEmbedder::new(&config(&server, 100), None).unwrap();
    assert_eq!(embedder.embed("manager").source, EmbeddingSource::Fallback);
}

#[test]
fn each_chunk_falls_back_on_its_own() {
    let server = MockServer::start();
    // Always two vectors: right for the first chunk, wrong for the last.
    let mock = server.mock(|when, then| {
        when.method(POST).path("/v1/embeddings");
        then.status(200).json_body(json!({
            "data": [
                {"index": 0, "embedding": [1.0, 0.0, 0.0]},
                {"index": 1, "embedding": [0.0, 0.0, 1.0]}
            ]
        }));
    });

    let embedder = RemoteEmbedder::new(&config(&server, 2), None).unwrap();
    let out = embedder.embed_batch(&texts(&["a", "b", "c"]));

    mock.assert_calls(2);
    let sources: Vec<EmbeddingSource> = out.iter().map(|e| e.source).collect();
    assert_eq!(
        sources,
        [EmbeddingSource::Remote, EmbeddingSource::Remote, EmbeddingSource::Fallback]
    );
}

#[test]
fn unreachable_endpoint_is_deterministic() {
    let config = EmbeddingConfig {
        backend: EmbeddingBackend::Remote,
        // Nothing listens on the discard port.
        endpoint: "http://127.0.0.1:9/v1/embeddings".to_string(),
        dimensions: 16,
        timeout_secs: 1,
        ..EmbeddingConfig::default()
    };
    let provider = create_provider(&config);
    assert_eq!(provider.name(), "remote");

    let first = provider.embed("fallback please");
    let second = provider.embed("fallback please");
    assert_eq!(first, second);
    assert_eq!(first.source, EmbeddingSource::Fallback);
}
