//! teamscout - rank people against a project description and assemble
//! candidate teams from the ranking.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod profile;
pub mod requirements;
pub mod search;
pub mod team;
pub mod test_utils;
pub mod text;

pub use error::{Result, ScoutError};
