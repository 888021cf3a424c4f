//! teamscout search - rank candidates against a description

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;

use super::extract::requirement_lines;
use super::load_candidates;
use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, join_or_dash};
use crate::error::Result;
use crate::search::SearchRequest;

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Project description
    pub description: String,

    /// JSON file holding an array of candidate profiles
    #[arg(long, short)]
    pub candidates: PathBuf,

    /// Team size, overriding any size stated in the description
    #[arg(long, allow_negative_numbers = true)]
    pub team_size: Option<i64>,

    /// Maximum number of results
    #[arg(long, short, default_value = "10")]
    pub limit: usize,
}

pub fn run(ctx: &AppContext, args: &SearchArgs) -> Result<()> {
    let candidates = load_candidates(&args.candidates)?;
    let mut request = SearchRequest::new(&args.description, candidates);
    request.team_size = args.team_size;

    let mut response = ctx.engine.search(&request)?;
    response.recommendations.truncate(args.limit);

    if ctx.robot() {
        return emit_json(&response);
    }

    let mut layout = HumanLayout::new();
    layout.title("Search");
    requirement_lines(&mut layout, &response.requirement);
    layout.blank();

    let meta = &response.metadata;
    layout
        .kv("Candidates", &meta.total_candidates.to_string())
        .kv("Kept", &meta.filtered_candidates.to_string())
        .kv("Time", &format!("{} ms", meta.retrieval_time_ms))
        .kv(
            "Semantic search",
            if meta.semantic_search_used { "yes" } else { "no (local fallback)" },
        );
    layout.blank();

    if response.recommendations.is_empty() {
        layout.bullet("No candidate met the thresholds");
    }
    for (rank, score) in response.recommendations.iter().enumerate() {
        layout.section(&format!("{}. {}", rank + 1, score.candidate_name));
        let sub = &score.sub_scores;
        layout
            .kv("Total", &format!("{:.3}", score.total_score).green().to_string())
            .kv(
                "Sub-scores",
                &format!(
                    "semantic {:.2}  keyword {:.2}  proximity {:.2}  domain {:.2}  budget -{:.2}",
                    sub.semantic, sub.keyword, sub.proximity, sub.domain, sub.budget_penalty
                ),
            )
            .kv("Roles", &join_or_dash(&score.evidence.matched_roles))
            .kv("Skills", &join_or_dash(&score.evidence.matched_skills));
        for reason in &score.evidence.reasons {
            layout.bullet(reason);
        }
        layout.blank();
    }

    emit_human(layout);
    Ok(())
}
