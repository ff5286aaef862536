use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Overrides `api.host`.
pub const ENV_HOST: &str = "CATFACTS_HOST";
/// Overrides `api.port`.
pub const ENV_BACKEND_PORT: &str = "CATFACTS_BACKEND_PORT";
/// Overrides `api.base_url`.
pub const ENV_BASE_URL: &str = "CATFACTS_BASE_URL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/catfacts/config.toml` on Unix/macOS, or the platform
    /// equivalent via `dirs::config_dir()`. Falls back to the current
    /// directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("catfacts").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads and validates configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    ///
    /// Environment overrides are not applied here; see [`Config::apply_env`].
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::read_from(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse `path` without validating, for callers that layer more
    /// overrides on top and validate once at the end.
    pub fn read_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Apply `CATFACTS_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup. Empty values are ignored.
    ///
    /// A host or port set here replaces a `base_url` from the file unless
    /// `CATFACTS_BASE_URL` is set too. Only a malformed port is rejected;
    /// call [`Config::validate`] once every layer is applied.
    pub fn apply_env_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let host = get(ENV_HOST);
        let port = match get(ENV_BACKEND_PORT) {
            Some(port) => Some(port.trim().parse().map_err(|_| {
                ConfigError::ValidationError {
                    message: format!("{} must be a port number, got '{}'", ENV_BACKEND_PORT, port),
                }
            })?),
            None => None,
        };

        self.api.override_endpoint(
            host.map(|h| h.trim().to_string()),
            port,
            get(ENV_BASE_URL).map(|u| u.trim().to_string()),
        );
        Ok(())
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - host is not empty and port is not zero
    /// - an explicit base URL parses as http/https
    /// - the tick rate is positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.host.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.host must not be empty".to_string(),
            });
        }

        if self.api.port == 0 {
            return Err(ConfigError::ValidationError {
                message: "api.port must not be 0".to_string(),
            });
        }

        if let Some(url) = self.api.base_url.as_deref().filter(|u| !u.trim().is_empty()) {
            let parsed = reqwest::Url::parse(url.trim()).map_err(|e| {
                ConfigError::ValidationError {
                    message: format!("api.base_url '{}' is not a valid URL: {}", url, e),
                }
            })?;
            if !matches!(parsed.scheme(), "http" | "https") {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "api.base_url '{}' must use http or https, got '{}'",
                        url,
                        parsed.scheme()
                    ),
                });
            }
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than 0".to_string(),
            });
        }

        Ok(())
    }
}
