//! Configuration loading for the cat facts client.
//!
//! Values are layered: built-in defaults, then `config.toml`, then
//! environment variables, then CLI flags (applied by the binary).

mod loader;
mod types;

pub use loader::{ConfigError, ENV_BACKEND_PORT, ENV_BASE_URL, ENV_HOST};
pub use types::{ApiConfig, Config, UiConfig};
