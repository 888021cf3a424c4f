//! teamscout extract - show the structured requirement for a description

use clap::Args;

use crate::app::AppContext;
use crate::cli::output::{HumanLayout, emit_human, emit_json, join_or_dash};
use crate::error::Result;
use crate::requirements::{Category, Requirement};

#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Project description
    pub description: String,

    /// Team size, overriding any size stated in the description
    #[arg(long, allow_negative_numbers = true)]
    pub team_size: Option<i64>,
}

pub fn run(ctx: &AppContext, args: &ExtractArgs) -> Result<()> {
    let requirement = ctx
        .engine
        .extractor()
        .extract(&args.description, args.team_size)?;

    if ctx.robot() {
        return emit_json(&requirement);
    }

    let mut layout = HumanLayout::new();
    layout.title("Requirement");
    requirement_lines(&mut layout, &requirement);
    emit_human(layout);
    Ok(())
}

/// Requirement fields as key/value lines.
pub fn requirement_lines(layout: &mut HumanLayout, requirement: &Requirement) {
    layout
        .kv("Team size", &requirement.team_size.to_string())
        .kv("Roles", &join_or_dash(&requirement.roles))
        .kv("Skills", &join_or_dash(&requirement.skills))
        .kv("Domain", requirement.domain.name())
        .kv("Urgency", requirement.urgency.name())
        .kv("Budget", requirement.budget.name())
        .kv("Location", requirement.location.name())
        .kv("Languages", &join_or_dash(&requirement.languages));
}
