//! Command-line surface.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

pub mod commands;
pub mod output;

pub use output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "teamscout",
    version,
    about = "Rank candidates and assemble teams from a project description"
)]
pub struct Cli {
    /// Config file to use instead of the global and project files
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Machine-readable JSON output (and JSON logs on stderr)
    #[arg(long, global = true)]
    pub robot: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Disable logging
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    #[must_use]
    pub const fn output_format(&self) -> OutputFormat {
        if self.robot {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Turn a description into a structured requirement
    Extract(commands::extract::ExtractArgs),
    /// Rank candidates against a description
    Search(commands::search::SearchArgs),
    /// Build the four strategy teams for a description
    Teams(commands::teams::TeamsArgs),
}
