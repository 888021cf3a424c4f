use std::sync::Arc;

use proptest::prelude::*;

use teamscout::config::{Config, ScoringConfig};
use teamscout::profile::CandidateProfile;
use teamscout::requirements::Requirement;
use teamscout::search::{HashEmbedder, SearchEngine, SearchRequest};
use teamscout::team::assembler::composition;
use teamscout::team::{RuleBasedMatcher, ScoredCandidate, TeamAssembler};
use teamscout::test_utils::fixtures::{StaticEmbedder, developer, generated_pool};

const ROLES: &[&str] = &[
    "Frontend Developer",
    "Backend Developer",
    "UI/UX Designer",
    "Project Manager",
    "Data Scientist",
];
const SKILLS: &[&str] = &["react", "python", "figma", "seo", "docker", "sql"];
const WORDS: &[&str] = &[
    "react", "web", "app", "istanbul", "remote", "urgent", "design", "data", "marketing",
    "budget", "team", "mobile", "cloud",
];

fn subset(pool: &'static [&'static str]) -> impl Strategy<Value = Vec<String>> {
    prop::sample::subsequence(pool, 0..=pool.len())
        .prop_map(|picked| picked.into_iter().map(str::to_string).collect())
}

fn member() -> impl Strategy<Value = ScoredCandidate> {
    (0u32..1000, subset(ROLES), subset(SKILLS), 0.0f64..=10.0, 0.0f64..=10.0).prop_map(
        |(id, matched_roles, matched_skills, relationship, availability)| ScoredCandidate {
            candidate: CandidateProfile::new(format!("c{id}"), "x"),
            role_match: 0.0,
            skill_match: 0.0,
            relationship_score: relationship,
            availability_score: availability,
            location_score: 5.0,
            total_score: relationship,
            matched_roles,
            matched_skills,
        },
    )
}

proptest! {
    #[test]
    fn composition_scores_stay_in_range(
        members in prop::collection::vec(member(), 0..8),
        required in subset(ROLES),
    ) {
        let refs: Vec<&str> = required.iter().map(String::as_str).collect();
        let requirement = Requirement::new("x", 3).with_roles(&refs);
        let composition = composition(&requirement, &members);
        prop_assert!((0.0..=10.0).contains(&composition.coverage_score));
        prop_assert!((0.0..=10.0).contains(&composition.diversity_score));
    }

    #[test]
    fn strategies_fill_the_team_from_a_large_enough_pool(pool_size in 1usize..30, team in 1usize..12) {
        prop_assume!(pool_size >= team);
        let requirement = Requirement::new("react web app", team).with_roles(&["Frontend Developer"]);
        let scored = RuleBasedMatcher::default().score(&requirement, &generated_pool(pool_size));
        for recommendation in TeamAssembler.assemble(&requirement, &scored) {
            let mut ids: Vec<&str> = recommendation
                .members
                .iter()
                .map(|m| m.candidate.id.as_str())
                .collect();
            prop_assert_eq!(ids.len(), team);
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), team);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn filtered_ranking_respects_thresholds(
        words in prop::collection::vec(prop::sample::select(WORDS), 1..8),
        roles in subset(ROLES),
        pool_size in 0usize..40,
    ) {
        let engine = SearchEngine::new(Arc::new(HashEmbedder::new(48)), &Config::default());
        let refs: Vec<&str> = roles.iter().map(String::as_str).collect();
        let requirement = Requirement::new(words.join(" "), 3).with_roles(&refs);
        let response = engine.search_with_requirement(
            requirement,
            &generated_pool(pool_size),
            ScoringConfig::default(),
        );

        let t = ScoringConfig::default().thresholds;
        prop_assert_eq!(response.metadata.total_candidates, pool_size);
        prop_assert_eq!(response.metadata.filtered_candidates, response.recommendations.len());
        for score in &response.recommendations {
            prop_assert!(score.sub_scores.semantic >= t.min_semantic);
            prop_assert!(score.sub_scores.keyword >= t.min_keyword);
            prop_assert!(score.sub_scores.proximity >= t.min_proximity);
        }
    }
}

/// Distinct copies of the seeded developer; each one clears the default
/// thresholds for a react query under a constant embedding.
fn qualified_pool(size: usize) -> Vec<CandidateProfile> {
    (0..size)
        .map(|i| {
            let mut profile = developer();
            profile.id = format!("dev{i}");
            profile.name = format!("Developer {i}");
            profile
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn retrieved_teams_fill_every_strategy(pool_size in 1usize..20, team in 1usize..=12) {
        prop_assume!(pool_size >= team);
        let engine = SearchEngine::new(Arc::new(StaticEmbedder::new(16)), &Config::default());
        let request = SearchRequest::new("react web app for a technology startup", qualified_pool(pool_size))
            .with_team_size(i64::try_from(team).unwrap());

        let response = engine.recommend_teams(&request).unwrap();
        prop_assert_eq!(response.requirement.team_size, team);
        prop_assert_eq!(response.metadata.filtered_candidates, pool_size);
        prop_assert_eq!(response.teams.len(), 4);
        for recommendation in &response.teams {
            let mut ids: Vec<&str> = recommendation
                .members
                .iter()
                .map(|m| m.candidate.id.as_str())
                .collect();
            prop_assert_eq!(ids.len(), team, "{} is short", recommendation.strategy);
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), team);
        }
    }
}
