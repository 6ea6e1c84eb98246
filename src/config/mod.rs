//! Application configuration module
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values are read with the `DEMAND_DESK`
//! prefix and `__` as the nesting separator, so
//! `DEMAND_DESK__BOARD__LIST_ID` lands in `board.list_id`.
//!
//! # Example
//!
//! ```no_run
//! use demand_desk::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod board;
mod error;

pub use board::BoardConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Task-tracking board (credentials and destination list).
    #[serde(default)]
    pub board: BoardConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Loads `.env` if present (development), then reads
    /// `DEMAND_DESK`-prefixed variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types. Missing or placeholder credentials are NOT an error here:
    /// the card service rejects them at submission time, so the form still
    /// starts and can show that feedback.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("DEMAND_DESK")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.board.validate()
    }
}
