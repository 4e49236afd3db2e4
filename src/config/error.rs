//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    #[error("Logging initialisation failed: {0}")]
    Logging(String),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Cache TTL must be between 1 and {max} seconds, got {value}")]
    InvalidCacheTtl { value: u64, max: u64 },

    #[error("Cache must hold at least one entry")]
    InvalidCacheSize,

    #[error("Log level must not be empty")]
    EmptyLogLevel,

    #[error("Invalid log filter '{0}'")]
    InvalidLogLevel(String),
}
