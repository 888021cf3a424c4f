//! Four alternative teams from one scored pool.
//!
//! Each strategy is a stable re-sort of the same pool by one score, cut to
//! the team size. A pool smaller than the team size yields a short team.

use itertools::Itertools;
use tracing::debug;

use super::{
    CostBand, RiskLevel, SCORE_SCALE, ScoredCandidate, Strategy, TeamComposition,
    TeamRecommendation,
};
use crate::requirements::{Budget, Category, Requirement, Urgency};

const TIMELINES: [&str; 4] = ["1-2 weeks", "2-4 weeks", "4-8 weeks", "8-12 weeks"];

/// Average relationship at which a team is assumed to cost one band less.
const TRUSTED_TEAM: f64 = 7.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct TeamAssembler;

impl TeamAssembler {
    /// One recommendation per strategy, in [`Strategy::ALL`] order.
    #[must_use]
    pub fn assemble(
        &self,
        requirement: &Requirement,
        scored: &[ScoredCandidate],
    ) -> Vec<TeamRecommendation> {
        Strategy::ALL
            .iter()
            .map(|strategy| self.build(*strategy, requirement, scored))
            .collect()
    }

    /// The members a strategy would pick, best first.
    #[must_use]
    pub fn select(
        &self,
        strategy: Strategy,
        team_size: usize,
        scored: &[ScoredCandidate],
    ) -> Vec<ScoredCandidate> {
        let mut ordered: Vec<&ScoredCandidate> = scored.iter().collect();
        ordered.sort_by(|a, b| strategy.key(b).total_cmp(&strategy.key(a)));
        ordered
            .into_iter()
            .unique_by(|member| member.candidate.effective_id())
            .take(team_size)
            .cloned()
            .collect()
    }

    fn build(
        &self,
        strategy: Strategy,
        requirement: &Requirement,
        scored: &[ScoredCandidate],
    ) -> TeamRecommendation {
        let members = self.select(strategy, requirement.team_size, scored);
        let composition = composition(requirement, &members);
        let short = members.len() < requirement.team_size;

        debug!(
            target: "assembly",
            strategy = %strategy,
            members = members.len(),
            wanted = requirement.team_size,
            coverage = composition.coverage_score,
            "team assembled"
        );

        TeamRecommendation {
            strategy,
            reasoning: reasoning(strategy, requirement, &members, &composition),
            estimated_cost: estimated_cost(strategy, requirement.budget, &composition),
            timeline: timeline(strategy, requirement.urgency, short).to_string(),
            risk_level: risk_level(short, composition.coverage_score),
            team_composition: composition,
            members,
        }
    }
}

/// Aggregate view of a chosen team.
#[must_use]
pub fn composition(requirement: &Requirement, members: &[ScoredCandidate]) -> TeamComposition {
    let roles: Vec<String> = members
        .iter()
        .flat_map(|m| m.matched_roles.iter().cloned())
        .unique()
        .collect();
    let skills: Vec<String> = members
        .iter()
        .flat_map(|m| m.matched_skills.iter().cloned())
        .unique()
        .collect();

    #[allow(clippy::cast_precision_loss)]
    let diversity_score = ((roles.len() + skills.len()) as f64 / 2.0).min(SCORE_SCALE);

    let coverage_score = if requirement.roles.is_empty() {
        SCORE_SCALE
    } else {
        let covered = requirement
            .roles
            .iter()
            .filter(|role| roles.contains(role))
            .count();
        #[allow(clippy::cast_precision_loss)]
        let ratio = covered as f64 / requirement.roles.len().max(1) as f64;
        (ratio * SCORE_SCALE).min(SCORE_SCALE)
    };

    TeamComposition {
        average_relationship_score: mean(members.iter().map(|m| m.relationship_score)),
        average_availability_score: mean(members.iter().map(|m| m.availability_score)),
        roles,
        skills,
        diversity_score,
        coverage_score,
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let avg = sum / count as f64;
        avg
    }
}

/// Budget sets the base band; speed and seniority cost one band more, a
/// close-knit team one band less.
#[must_use]
pub fn estimated_cost(strategy: Strategy, budget: Budget, composition: &TeamComposition) -> CostBand {
    let mut band: i32 = match budget {
        Budget::Low => 0,
        Budget::Medium => 1,
        Budget::High => 2,
    };
    if matches!(strategy, Strategy::FastStart | Strategy::SeniorLeadership) {
        band += 1;
    }
    if composition.average_relationship_score >= TRUSTED_TEAM {
        band -= 1;
    }
    match band.clamp(0, 2) {
        0 => CostBand::Low,
        1 => CostBand::Medium,
        _ => CostBand::High,
    }
}

#[must_use]
pub fn timeline(strategy: Strategy, urgency: Urgency, short: bool) -> &'static str {
    let mut index: i32 = match urgency {
        Urgency::High => 0,
        Urgency::Medium => 1,
        Urgency::Low => 2,
    };
    match strategy {
        Strategy::FastStart => index -= 1,
        Strategy::SeniorLeadership => index += 1,
        Strategy::LocalAlignment | Strategy::Balanced => {}
    }
    if short {
        index += 1;
    }
    let index = usize::try_from(index.max(0)).unwrap_or(0).min(TIMELINES.len() - 1);
    TIMELINES[index]
}

#[must_use]
pub fn risk_level(short: bool, coverage: f64) -> RiskLevel {
    if short || coverage < 5.0 {
        RiskLevel::High
    } else if coverage < 8.0 {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}

fn reasoning(
    strategy: Strategy,
    requirement: &Requirement,
    members: &[ScoredCandidate],
    composition: &TeamComposition,
) -> String {
    let mut text = match strategy {
        Strategy::FastStart => format!(
            "Picks the people most likely to start right away (average availability {:.1}/10).",
            composition.average_availability_score
        ),
        Strategy::SeniorLeadership => {
            let covered = requirement
                .roles
                .iter()
                .filter(|role| composition.roles.contains(role))
                .count();
            format!(
                "Picks the strongest role fits, covering {covered} of {} requested roles.",
                requirement.roles.len()
            )
        }
        Strategy::LocalAlignment => format!(
            "Picks the people best placed for a {} setup.",
            requirement.location.name()
        ),
        Strategy::Balanced => format!(
            "Picks the highest overall scores (average relationship {:.1}/10).",
            composition.average_relationship_score
        ),
    };
    if members.len() < requirement.team_size {
        text.push_str(&format!(
            " Only {} of {} positions could be filled from the available pool.",
            members.len(),
            requirement.team_size
        ));
    }
    text
}
