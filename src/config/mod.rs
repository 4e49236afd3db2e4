//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `EXOHAB` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment is a valid configuration.
//!
//! # Example
//!
//! ```no_run
//! use exo_habitability::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let scoring = config.scoring.load_scoring_config().expect("Invalid scoring file");
//! println!("Minimum factors: {}", scoring.minimum_factors());
//! ```

mod cache;
mod error;
mod logging;
mod scoring;

pub use cache::{CacheConfig, MAX_TTL_SECS};
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;
pub use scoring::{ScoringSettings, DEFAULT_SCORING_PATHS, SCORING_CONFIG_ENV};

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Scoring file location
    #[serde(default)]
    pub scoring: ScoringSettings,

    /// Score cache bounds
    #[serde(default)]
    pub cache: CacheConfig,

    /// Log filter and format
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `EXOHAB` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `EXOHAB__CACHE__TTL_SECS=600` -> `cache.ttl_secs = 600`
    /// - `EXOHAB__SCORING__CONFIG_PATH=...` -> `scoring.config_path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("EXOHAB")
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
        self.cache.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "EXOHAB__CACHE__TTL_SECS",
        "EXOHAB__CACHE__MAX_ENTRIES",
        "EXOHAB__LOGGING__LEVEL",
        "EXOHAB__LOGGING__JSON",
        "EXOHAB__SCORING__CONFIG_PATH",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.cache, CacheConfig::default());
        assert_eq!(config.logging, LoggingConfig::default());
        assert_eq!(config.scoring.config_path, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("EXOHAB__CACHE__TTL_SECS", "600");
        env::set_var("EXOHAB__LOGGING__LEVEL", "warn");
        env::set_var("EXOHAB__SCORING__CONFIG_PATH", "/etc/exohab/scoring.yaml");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.cache.ttl_secs, 600);
        assert_eq!(config.cache.max_entries, 10_000);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(
            config.scoring.config_path,
            Some(PathBuf::from("/etc/exohab/scoring.yaml"))
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_ttl() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        env::set_var("EXOHAB__CACHE__TTL_SECS", "100000");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidCacheTtl { value: 100_000, .. })
        ));
    }
}
