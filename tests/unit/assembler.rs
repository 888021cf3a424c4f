use teamscout::profile::CandidateProfile;
use teamscout::requirements::{Budget, LocationPreference, Requirement, Urgency};
use teamscout::team::{CostBand, RiskLevel, RuleBasedMatcher, ScoredCandidate, Strategy, TeamAssembler};
use teamscout::test_utils::fixtures::{generated_pool, seeded_pool};

fn scored(id: &str, availability: f64, role_match: f64, location: f64, total: f64) -> ScoredCandidate {
    ScoredCandidate {
        candidate: CandidateProfile::new(id, id),
        role_match,
        skill_match: 0.0,
        relationship_score: 5.0,
        availability_score: availability,
        location_score: location,
        total_score: total,
        matched_roles: Vec::new(),
        matched_skills: Vec::new(),
    }
}

fn ids(members: &[ScoredCandidate]) -> Vec<&str> {
    members.iter().map(|m| m.candidate.id.as_str()).collect()
}

#[test]
fn each_strategy_sorts_by_its_own_score() {
    let pool = vec![
        scored("available", 10.0, 0.0, 2.0, 3.0),
        scored("senior", 2.0, 10.0, 2.0, 4.0),
        scored("local", 2.0, 0.0, 10.0, 5.0),
        scored("best", 5.0, 5.0, 5.0, 9.0),
    ];
    let requirement = Requirement::new("x", 1);
    let teams = TeamAssembler.assemble(&requirement, &pool);

    let strategies: Vec<Strategy> = teams.iter().map(|t| t.strategy).collect();
    assert_eq!(strategies, Strategy::ALL);
    assert_eq!(ids(&teams[0].members), ["available"]);
    assert_eq!(ids(&teams[1].members), ["senior"]);
    assert_eq!(ids(&teams[2].members), ["local"]);
    assert_eq!(ids(&teams[3].members), ["best"]);
}

#[test]
fn full_pool_gives_distinct_members_per_strategy() {
    let pool = generated_pool(20);
    let requirement = Requirement::new("react web app", 5).with_roles(&["Frontend Developer"]);
    let scored = RuleBasedMatcher::default().score(&requirement, &pool);
    for team in TeamAssembler.assemble(&requirement, &scored) {
        let mut members = ids(&team.members);
        assert_eq!(members.len(), 5, "{}", team.strategy);
        members.sort_unstable();
        members.dedup();
        assert_eq!(members.len(), 5, "{} repeats a member", team.strategy);
    }
}

#[test]
fn composition_summarises_the_seeded_team() {
    let requirement = Requirement::new("web app", 3)
        .with_roles(&["Frontend Developer", "Project Manager", "Data Scientist"])
        .with_skills(&["react", "scrum"])
        .with_urgency(Urgency::High)
        .with_budget(Budget::High)
        .with_location(LocationPreference::Remote);
    let scored = RuleBasedMatcher::default().score(&requirement, &seeded_pool());
    let teams = TeamAssembler.assemble(&requirement, &scored);
    let balanced = &teams[3];

    let composition = &balanced.team_composition;
    assert_eq!(balanced.members.len(), 3);
    // Frontend Developer and Project Manager out of three required roles.
    assert!((composition.coverage_score - 20.0 / 3.0).abs() < 1e-9);
    // Two roles plus two skills.
    assert!((composition.diversity_score - 2.0).abs() < f64::EPSILON);
    assert!((composition.average_relationship_score - 7.0).abs() < 1e-9);
    assert_eq!(balanced.risk_level, RiskLevel::Medium);
    // High budget, lowered one band by the trusted team.
    assert_eq!(balanced.estimated_cost, CostBand::Medium);
    assert_eq!(balanced.timeline, "1-2 weeks");
}

#[test]
fn empty_pool_yields_four_empty_teams() {
    let requirement = Requirement::new("anything", 2).with_roles(&["Designer"]);
    let teams = TeamAssembler.assemble(&requirement, &[]);
    assert_eq!(teams.len(), 4);
    for team in teams {
        assert!(team.members.is_empty());
        assert!(team.team_composition.coverage_score.abs() < f64::EPSILON);
        assert!(team.team_composition.average_availability_score.abs() < f64::EPSILON);
        assert_eq!(team.risk_level, RiskLevel::High);
    }
}
