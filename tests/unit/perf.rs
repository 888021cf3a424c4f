//! Wall-clock budget for a full local search.
//!
//! Runs in the test profile, so the budget is generous compared to the
//! criterion numbers in `benches/search_perf.rs`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use teamscout::config::Config;
use teamscout::search::{HashEmbedder, SearchEngine, SearchRequest};
use teamscout::test_utils::fixtures::generated_pool;

#[test]
fn hundred_candidate_search_stays_under_five_seconds() {
    let engine = SearchEngine::new(Arc::new(HashEmbedder::default()), &Config::default());
    let request = SearchRequest::new(
        "Acil: 4 kişilik ekip, react ve python ile web uygulaması, İstanbul ofiste",
        generated_pool(100),
    );

    let start = Instant::now();
    let response = engine.search(&request).unwrap();
    let elapsed = start.elapsed();

    println!("[PERF] search over 100 candidates: {elapsed:?}");
    assert_eq!(response.metadata.total_candidates, 100);
    assert!(!response.metadata.semantic_search_used);
    assert!(elapsed < Duration::from_secs(5), "took {elapsed:?}");
}
