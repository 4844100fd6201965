//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TASKBRIDGE_` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use taskbridge::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Relay polls every {:?}", config.relay.poll_interval());
//! ```

mod error;
mod log;
mod relay;

pub use error::{ConfigError, ValidationError};
pub use log::LogConfig;
pub use relay::RelayConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Contains all configuration sections for the taskbridge application.
/// Load using [`AppConfig::load()`] which reads from environment variables.
/// Every section has working defaults, so an empty environment is valid.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Logging configuration (filter directive, output format)
    #[serde(default)]
    pub log: LogConfig,

    /// Outbox relay configuration (poll interval, batch size)
    #[serde(default)]
    pub relay: RelayConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TASKBRIDGE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TASKBRIDGE__LOG__FILTER=debug` -> `log.filter = "debug"`
    /// - `TASKBRIDGE__RELAY__BATCH_SIZE=50` -> `relay.batch_size = 50`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the expected
    /// types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TASKBRIDGE")
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
        self.log.validate()?;
        self.relay.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("TASKBRIDGE__LOG__FILTER");
        env::remove_var("TASKBRIDGE__LOG__JSON");
        env::remove_var("TASKBRIDGE__RELAY__POLL_INTERVAL_MS");
        env::remove_var("TASKBRIDGE__RELAY__BATCH_SIZE");
    }

    #[test]
    fn test_load_with_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.log.filter, "info,taskbridge=debug");
        assert_eq!(config.relay.batch_size, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_custom_log_filter() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TASKBRIDGE__LOG__FILTER", "warn");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.log.filter, "warn");
    }

    #[test]
    fn test_custom_relay_settings() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TASKBRIDGE__RELAY__POLL_INTERVAL_MS", "250");
        env::set_var("TASKBRIDGE__RELAY__BATCH_SIZE", "25");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.relay.poll_interval_ms, 250);
        assert_eq!(config.relay.batch_size, 25);
    }

    #[test]
    fn test_json_log_toggle() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TASKBRIDGE__LOG__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.log.json);
    }

    #[test]
    fn test_out_of_range_batch_size_fails_validation() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TASKBRIDGE__RELAY__BATCH_SIZE", "5000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::BatchSizeOutOfRange)
        ));
    }
}
