use std::sync::Arc;

use teamscout::config::{Config, ScoringConfig, ScoringPatch, ThresholdsPatch};
use teamscout::requirements::{Domain, Requirement};
use teamscout::search::embeddings::EmbeddingSource;
use teamscout::search::{SearchEngine, SearchRequest};
use teamscout::team::{RuleBasedMatcher, Strategy, TeamAssembler, TeamRecommendation};
use teamscout::test_utils::fixtures::{StaticEmbedder, seeded_pool, technology_requirement};

fn engine_with(provider: StaticEmbedder) -> SearchEngine {
    SearchEngine::new(Arc::new(provider), &Config::default())
}

fn position(team: &TeamRecommendation, id: &str) -> Option<usize> {
    team.members.iter().position(|m| m.candidate.id == id)
}

fn balanced(teams: &[TeamRecommendation]) -> &TeamRecommendation {
    teams
        .iter()
        .find(|t| t.strategy == Strategy::Balanced)
        .expect("balanced team is always produced")
}

#[test]
fn balanced_ranks_developer_above_designer() {
    let engine = engine_with(StaticEmbedder::new(16));
    let pool = seeded_pool();
    let requirement = technology_requirement();
    assert_eq!(requirement.domain, "teknoloji".parse::<Domain>().unwrap());

    let response = engine.search_with_requirement(requirement, &pool, ScoringConfig::default());
    let teams = engine.teams_from_search(&response, &pool);
    assert_eq!(teams.len(), 4);

    // The designer shares no role, skill or term with the requirement, so the
    // keyword threshold removes them before assembly.
    let designer = response
        .recommendations
        .iter()
        .find(|score| score.candidate_id == "designer");
    assert!(designer.is_none(), "designer passed the keyword threshold: {designer:?}");

    let team = balanced(&teams);
    assert_eq!(position(team, "dev"), Some(0));
    assert!(position(team, "designer").is_none());
    for team in &teams {
        assert!(position(team, "designer").is_none(), "{} kept the designer", team.strategy);
    }
}

#[test]
fn rule_based_balanced_ranks_developer_above_designer() {
    let pool = seeded_pool();
    let requirement = technology_requirement();
    let scored = RuleBasedMatcher::default().score(&requirement, &pool);
    let teams = TeamAssembler.assemble(&requirement, &scored);

    let team = balanced(&teams);
    assert_eq!(team.members.len(), 3);
    let developer = position(team, "dev").unwrap();
    let designer = position(team, "designer").unwrap();
    assert!(developer < designer);
    assert!((team.team_composition.coverage_score - 10.0).abs() < f64::EPSILON);
}

#[test]
fn unrelated_query_filters_everyone_out() {
    let engine = engine_with(StaticEmbedder::new(16));
    let requirement = Requirement::new(
        "Antik Yunan şiirlerini Latinceye çevirecek bir editör arıyoruz",
        2,
    )
    .with_roles(&["Poetry Translator"])
    .with_skills(&["latin"]);

    let response =
        engine.search_with_requirement(requirement, &seeded_pool(), ScoringConfig::default());
    assert!(response.recommendations.is_empty());
    assert_eq!(response.metadata.total_candidates, 3);
    assert_eq!(response.metadata.filtered_candidates, 0);
}

#[test]
fn semantic_flag_follows_embedding_source() {
    let request = SearchRequest::new("react web app", seeded_pool());

    let remote = engine_with(StaticEmbedder::new(8)).search(&request).unwrap();
    assert!(remote.metadata.semantic_search_used);

    let local = engine_with(StaticEmbedder::new(8).with_source(EmbeddingSource::Fallback))
        .search(&request)
        .unwrap();
    assert!(!local.metadata.semantic_search_used);
}

#[test]
fn request_override_relaxes_thresholds() {
    let engine = engine_with(StaticEmbedder::new(8));
    // Two people: no project manager is added to the roles.
    let description = "Antik Yunan şiiri çevirisi";
    let strict = engine
        .search(&SearchRequest::new(description, seeded_pool()).with_team_size(2))
        .unwrap();
    assert!(strict.recommendations.is_empty());

    let relaxed = SearchRequest::new(description, seeded_pool())
        .with_team_size(2)
        .with_config(ScoringPatch {
            thresholds: Some(ThresholdsPatch {
                min_keyword: Some(0.0),
                ..ThresholdsPatch::default()
            }),
            ..ScoringPatch::default()
        });
    let response = engine.search(&relaxed).unwrap();
    assert_eq!(response.metadata.filtered_candidates, 3);
}

#[test]
fn recommend_teams_uses_extracted_team_size() {
    let engine = engine_with(StaticEmbedder::new(8));
    let request = SearchRequest::new("Need 2 developers for a react web app", seeded_pool());
    let response = engine.recommend_teams(&request).unwrap();
    assert_eq!(response.requirement.team_size, 2);
    assert_eq!(response.teams.len(), 4);
    for team in &response.teams {
        assert!(team.members.len() <= 2);
    }
}

#[test]
fn camel_case_override_applies_to_search() {
    let engine = engine_with(StaticEmbedder::new(8));
    let request: SearchRequest = serde_json::from_value(serde_json::json!({
        "description": "Antik Yunan şiiri çevirisi",
        "teamSize": 2,
        "candidates": seeded_pool(),
        "config": {
            "thresholds": {"minKeyword": 0.0},
            "weights": {"budgetPenalty": 0.9}
        }
    }))
    .unwrap();

    let patch = request.config.as_ref().unwrap();
    assert_eq!(patch.weights.as_ref().unwrap().budget_penalty, Some(0.9));
    assert_eq!(patch.thresholds.as_ref().unwrap().min_keyword, Some(0.0));

    let response = engine.search(&request).unwrap();
    assert_eq!(response.metadata.filtered_candidates, 3);
}

#[test]
fn unknown_override_keys_are_rejected() {
    for config in [
        serde_json::json!({"thresholds": {"minKeywrod": 0.0}}),
        serde_json::json!({"weights": {"budget": 0.9}}),
        serde_json::json!({"weight": {"semantic": 0.5}}),
    ] {
        let parsed = serde_json::from_value::<SearchRequest>(serde_json::json!({
            "description": "react web app",
            "config": config,
        }));
        assert!(parsed.is_err(), "accepted {config}");
    }
}

#[test]
fn request_deserializes_from_camel_case_json() {
    let request: SearchRequest = serde_json::from_str(
        r#"{
            "description": "react web app",
            "teamSize": 2,
            "candidates": [{"id": "a", "name": "Ada", "relationshipStrength": 9}],
            "config": {"weights": {"semantic": 0.5}}
        }"#,
    )
    .unwrap();
    assert_eq!(request.team_size, Some(2));
    assert_eq!(request.candidates.len(), 1);
    assert!((request.candidates[0].relationship() - 9.0).abs() < f64::EPSILON);
    assert!(request.config.is_some());
}
