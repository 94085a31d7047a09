//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `SELENE` prefix and nested values use double underscores
//! as separators.
//!
//! # Example
//!
//! ```no_run
//! use selene::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Completion model: {}", config.ai.model);
//! ```

mod ai;
mod celebration;
mod error;

pub use ai::AiConfig;
pub use celebration::CelebrationConfig;
pub use error::{ConfigError, ValidationError};

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the companion engine.
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// AI provider configuration (API key, model, endpoint)
    #[serde(default)]
    pub ai: AiConfig,

    /// Celebration date configuration (persona's birthday switch)
    #[serde(default)]
    pub celebration: CelebrationConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with the `SELENE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `SELENE__AI__API_KEY=sk-...` -> `ai.api_key = sk-...`
    /// - `SELENE__AI__MODEL=gpt-4o` -> `ai.model = gpt-4o`
    /// - `SELENE__CELEBRATION__MONTH=12` -> `celebration.month = 12`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    /// A missing API key is not an error here; it shows up later as a
    /// completion failure.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SELENE")
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
    /// Returns `ValidationError` if the celebration month/day pair is not a
    /// real calendar date.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.celebration.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ai: AiConfig::default(),
            celebration: CelebrationConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("SELENE__AI__API_KEY");
        env::remove_var("SELENE__AI__MODEL");
        env::remove_var("SELENE__CELEBRATION__MONTH");
        env::remove_var("SELENE__CELEBRATION__DAY");
    }

    #[test]
    fn load_applies_defaults_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();

        let config = AppConfig::load().unwrap();
        assert!(config.ai.api_key.is_none());
        assert_eq!(config.ai.model, "gpt-4");
        assert_eq!(config.celebration.month, 12);
        assert_eq!(config.celebration.day, 25);
    }

    #[test]
    fn load_reads_prefixed_variables() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("SELENE__AI__API_KEY", "sk-test");
        env::set_var("SELENE__AI__MODEL", "gpt-4o");
        env::set_var("SELENE__CELEBRATION__MONTH", "7");
        env::set_var("SELENE__CELEBRATION__DAY", "4");

        let config = AppConfig::load().unwrap();
        assert_eq!(config.ai.api_key.as_deref(), Some("sk-test"));
        assert_eq!(config.ai.model, "gpt-4o");
        assert_eq!(config.celebration.month, 7);
        assert_eq!(config.celebration.day, 4);

        clear_env();
    }

    #[test]
    fn missing_api_key_is_not_a_validation_error() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_celebration_date_fails_validation() {
        let config = AppConfig {
            celebration: CelebrationConfig { month: 2, day: 30 },
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
