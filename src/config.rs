//! Layered service configuration.
//!
//! Sources, lowest precedence first:
//!
//! 1. Built-in defaults
//! 2. `taskboard.toml` in the working directory, when present
//! 3. `TASKBOARD_*` environment variables, with `__` separating nested keys
//!    (for example `TASKBOARD_SERVER__BIND_ADDRESS=127.0.0.1:9000`)

use config::{Config, ConfigError, Environment, File, builder::DefaultState};
use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "TASKBOARD";

/// Base name of the optional configuration file.
pub const CONFIG_FILE: &str = "taskboard";

/// Top-level service configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TaskboardConfig {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Task storage settings.
    pub database: DatabaseConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Socket address the API binds to.
    pub bind_address: String,
}

/// Task storage settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite database path, or `:memory:`.
    pub url: String,
    /// Upper bound on pooled connections. An in-memory database always uses
    /// a single connection.
    pub max_connections: u32,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines.
    Text,
    /// One JSON object per event.
    Json,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Output format.
    pub format: LogFormat,
    /// Default `tracing` filter directive; `RUST_LOG` takes precedence.
    pub filter: String,
}

impl TaskboardConfig {
    /// Returns a builder preloaded with the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a default cannot be registered.
    pub fn defaults() -> Result<config::ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.bind_address", "0.0.0.0:8080")?
            .set_default("database.url", "tasks.db")?
            .set_default("database.max_connections", 8)?
            .set_default("logging.format", "text")?
            .set_default("logging.filter", "info")
    }

    /// Returns the environment source used for overrides.
    #[must_use]
    pub fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Loads configuration from defaults, the optional file and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source is malformed or a value has the
    /// wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::defaults()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Self::environment())
            .build()?
            .try_deserialize()
    }

    /// Loads a `.env` file into the process environment if one exists.
    ///
    /// # Errors
    ///
    /// Returns [`dotenvy::Error`] when the file exists but cannot be parsed.
    pub fn load_env_file() -> Result<bool, dotenvy::Error> {
        if !Path::new(".env").exists() {
            return Ok(false);
        }
        dotenvy::dotenv()?;
        Ok(true)
    }
}
