use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::Result;
use crate::search::SearchEngine;

pub struct AppContext {
    pub config: Config,
    pub engine: SearchEngine,
    pub output_format: OutputFormat,
}

impl AppContext {
    /// Load config relative to the working directory, which is where
    /// `teamscout.toml` is looked up.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project_root = std::env::current_dir()?;
        let config = Config::load(cli.config.as_deref(), &project_root)?;
        Ok(Self::with_config(config, cli.output_format()))
    }

    /// Context over an already loaded config.
    #[must_use]
    pub fn with_config(config: Config, output_format: OutputFormat) -> Self {
        let engine = SearchEngine::from_config(&config);
        Self {
            config,
            engine,
            output_format,
        }
    }

    #[must_use]
    pub const fn robot(&self) -> bool {
        matches!(self.output_format, OutputFormat::Json)
    }
}
