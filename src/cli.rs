//! Command-line surface: global backend overrides plus one subcommand.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{Config, ConfigError};

#[derive(Parser, Debug)]
#[command(name = "catfacts")]
#[command(about = "Browse and add cat facts on a cat facts backend")]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to the per-user config directory)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overriding host and port
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,

    /// Backend host
    #[arg(long, value_name = "HOST", global = true)]
    pub host: Option<String>,

    /// Backend port
    #[arg(long, value_name = "PORT", global = true)]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Interactive form and list (default)
    Tui,
    /// Print every stored fact, ordered by id
    List,
    /// Submit a new fact
    Add {
        /// Fact text; must be at least 5 characters once trimmed
        text: String,
    },
    /// Print one random fact
    Random,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Tui)
    }

    /// Config file, then environment, then flags. Validated once at the end.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        self.resolve_config_with(|key| std::env::var(key).ok())
    }

    /// [`Cli::resolve_config`] with an explicit environment lookup.
    pub fn resolve_config_with<F>(&self, env: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = self.config.clone().unwrap_or_else(Config::config_path);
        let mut config = Config::read_from(&path)?;
        config.apply_env_from(env)?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        config
            .api
            .override_endpoint(self.host.clone(), self.port, self.base_url.clone());
    }
}
