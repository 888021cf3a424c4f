use proptest::prelude::*;

use teamscout::config::{EmbeddingBackend, EmbeddingConfig};
use teamscout::search::{EmbeddingProvider, HashEmbedder, RemoteEmbedder, cosine_similarity};

fn nonzero_pair() -> impl Strategy<Value = (Vec<f32>, Vec<f32>)> {
    (1usize..64).prop_flat_map(|len| {
        (
            prop::collection::vec(-100.0f32..100.0, len),
            prop::collection::vec(-100.0f32..100.0, len),
        )
    })
}

fn has_magnitude(v: &[f32]) -> bool {
    v.iter().any(|x| x.abs() > 1e-3)
}

proptest! {
    #[test]
    fn cosine_is_symmetric((a, b) in nonzero_pair()) {
        prop_assume!(has_magnitude(&a) && has_magnitude(&b));
        let ab = cosine_similarity(&a, &b).unwrap();
        let ba = cosine_similarity(&b, &a).unwrap();
        prop_assert_eq!(ab, ba);
        prop_assert!((-1.0 - 1e-9..=1.0 + 1e-9).contains(&ab));
    }

    #[test]
    fn cosine_with_self_is_one((a, _) in nonzero_pair()) {
        prop_assume!(has_magnitude(&a));
        let score = cosine_similarity(&a, &a).unwrap();
        prop_assert!((score - 1.0).abs() < 1e-9, "self similarity {}", score);
    }

    #[test]
    fn hash_embedding_is_deterministic(text in ".*", dim in 1usize..256) {
        let embedder = HashEmbedder::new(dim);
        let first = embedder.embed(&text);
        let second = embedder.embed(&text);
        prop_assert_eq!(first.vector.len(), dim);
        prop_assert_eq!(first, second);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn forced_remote_failure_is_deterministic(text in "[a-z ]{0,40}") {
        let config = EmbeddingConfig {
            backend: EmbeddingBackend::Remote,
            endpoint: "http://127.0.0.1:9/v1/embeddings".to_string(),
            dimensions: 32,
            timeout_secs: 1,
            ..EmbeddingConfig::default()
        };
        let remote = RemoteEmbedder::new(&config, None).unwrap();
        let first = remote.embed(&text);
        let second = remote.embed(&text);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.vector, HashEmbedder::new(32).embed_vector(&text));
    }
}
