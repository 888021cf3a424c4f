//! CLI command implementations
//!
//! Each subcommand has its own module with:
//! - Args struct for command-line arguments
//! - run() function to execute the command

use std::path::Path;

use tracing::debug;

pub mod extract;
pub mod search;
pub mod teams;

use crate::app::AppContext;
use crate::cli::Commands;
use crate::error::{Result, ScoutError};
use crate::profile::CandidateProfile;

pub fn run(ctx: &AppContext, command: &Commands) -> Result<()> {
    match command {
        Commands::Extract(args) => extract::run(ctx, args),
        Commands::Search(args) => search::run(ctx, args),
        Commands::Teams(args) => teams::run(ctx, args),
    }
}

/// Read a JSON array of candidate profiles.
pub fn load_candidates(path: &Path) -> Result<Vec<CandidateProfile>> {
    let raw = std::fs::read_to_string(path).map_err(|err| {
        ScoutError::Io(std::io::Error::new(
            err.kind(),
            format!("read candidates {}: {err}", path.display()),
        ))
    })?;
    let candidates: Vec<CandidateProfile> = serde_json::from_str(&raw)?;
    debug!(target: "cli", path = %path.display(), count = candidates.len(), "candidates loaded");
    Ok(candidates)
}
