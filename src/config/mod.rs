//! Application configuration module
//!
//! Type-safe configuration loading using the `config` and `dotenvy` crates.
//! Values come from an optional `poll-board.toml` (or an explicit file) and
//! are overridden by environment variables with the `POLL_BOARD` prefix,
//! nested values separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use poll_board::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Seeding demo polls: {}", config.board.seed_demo_polls);
//! ```

mod board;
mod error;
mod logging;

pub use board::{BoardConfig, MAX_QUESTION_PREFIX_LENGTH};
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};

use serde::Deserialize;
use std::path::Path;

/// Base name of the optional configuration file in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "poll-board";

/// Root application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Board behaviour (seeding, question prefix)
    #[serde(default)]
    pub board: BoardConfig,

    /// Log level and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `poll-board.*` (if present) and the environment
    ///
    /// # Environment Variable Format
    ///
    /// - `POLL_BOARD__BOARD__SEED_DEMO_POLLS=false` -> `board.seed_demo_polls = false`
    /// - `POLL_BOARD__LOGGING__LEVEL=debug` -> `logging.level = "debug"`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be read or a value cannot be
    /// parsed into the expected type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from an explicit TOML file plus the environment
    ///
    /// With `None`, the optional `poll-board.*` file in the working directory
    /// is used instead. An explicit file must exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file is missing or malformed, or a value
    /// cannot be parsed into the expected type.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let file = match path {
            Some(path) => config::File::from(path)
                .format(config::FileFormat::Toml)
                .required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            .add_source(
                config::Environment::default()
                    .prefix("POLL_BOARD")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.board.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
