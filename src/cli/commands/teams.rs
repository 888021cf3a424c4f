//! teamscout teams - assemble the four strategy teams

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use super::extract::requirement_lines;
use super::load_candidates;
use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, join_or_dash};
use crate::error::Result;
use crate::requirements::Requirement;
use crate::search::{SearchMetadata, SearchRequest};
use crate::team::{RuleBasedMatcher, TeamRecommendation};

#[derive(Args, Debug)]
pub struct TeamsArgs {
    /// Project description
    pub description: String,

    /// JSON file holding an array of candidate profiles
    #[arg(long, short)]
    pub candidates: PathBuf,

    /// Team size, overriding any size stated in the description
    #[arg(long, allow_negative_numbers = true)]
    pub team_size: Option<i64>,

    /// Score every candidate with the keyword rules instead of embeddings
    #[arg(long)]
    pub rule_based: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TeamsOutput {
    requirement: Requirement,
    teams: Vec<TeamRecommendation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<SearchMetadata>,
}

pub fn run(ctx: &AppContext, args: &TeamsArgs) -> Result<()> {
    let candidates = load_candidates(&args.candidates)?;

    let output = if args.rule_based {
        let requirement = ctx
            .engine
            .extractor()
            .extract(&args.description, args.team_size)?;
        let scored = RuleBasedMatcher::new(&ctx.config.profile).score(&requirement, &candidates);
        let teams = ctx.engine.assembler().assemble(&requirement, &scored);
        TeamsOutput {
            requirement,
            teams,
            metadata: None,
        }
    } else {
        let mut request = SearchRequest::new(&args.description, candidates);
        request.team_size = args.team_size;
        let response = ctx.engine.recommend_teams(&request)?;
        TeamsOutput {
            requirement: response.requirement,
            teams: response.teams,
            metadata: Some(response.metadata),
        }
    };

    if ctx.robot() {
        return emit_json(&output);
    }

    let mut layout = HumanLayout::new();
    layout.title("Teams");
    requirement_lines(&mut layout, &output.requirement);
    layout.blank();

    for team in &output.teams {
        let composition = &team.team_composition;
        layout.section(team.strategy.as_str());
        layout
            .kv("Reasoning", &team.reasoning)
            .kv("Cost", &format!("{:?}", team.estimated_cost).to_lowercase())
            .kv("Timeline", &team.timeline)
            .kv("Risk", &format!("{:?}", team.risk_level).to_lowercase())
            .kv(
                "Coverage",
                &format!(
                    "{:.1}/10 (diversity {:.1})",
                    composition.coverage_score, composition.diversity_score
                ),
            )
            .kv("Roles covered", &join_or_dash(&composition.roles));
        if team.members.is_empty() {
            layout.bullet("(no members)");
        }
        for member in &team.members {
            layout.bullet(&format!(
                "{} ({:.1}) {}",
                member.candidate.name,
                member.total_score,
                join_or_dash(&member.matched_roles)
            ));
        }
        layout.blank();
    }

    emit_human(layout);
    Ok(())
}
