//! Score cache configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest allowed time-to-live: one day.
pub const MAX_TTL_SECS: u64 = 86_400;

/// Score cache configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CacheConfig {
    /// Seconds a cached score stays valid
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,

    /// Entry bound; the oldest entry is evicted on overflow
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl CacheConfig {
    /// Get TTL as Duration
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.ttl_secs == 0 || self.ttl_secs > MAX_TTL_SECS {
            return Err(ValidationError::InvalidCacheTtl {
                value: self.ttl_secs,
                max: MAX_TTL_SECS,
            });
        }
        if self.max_entries == 0 {
            return Err(ValidationError::InvalidCacheSize);
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            max_entries: default_max_entries(),
        }
    }
}

fn default_ttl_secs() -> u64 {
    3600
}

fn default_max_entries() -> usize {
    10_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_config_defaults() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl_secs, 3600);
        assert_eq!(config.max_entries, 10_000);
        assert_eq!(config.ttl(), Duration::from_secs(3600));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_ttl() {
        let config = CacheConfig {
            ttl_secs: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::InvalidCacheTtl { value: 0, max: MAX_TTL_SECS })
        );
    }

    #[test]
    fn test_validation_ttl_upper_bound() {
        let at_bound = CacheConfig {
            ttl_secs: MAX_TTL_SECS,
            ..Default::default()
        };
        assert!(at_bound.validate().is_ok());

        let over = CacheConfig {
            ttl_secs: MAX_TTL_SECS + 1,
            ..Default::default()
        };
        assert!(over.validate().is_err());
    }

    #[test]
    fn test_validation_zero_entries() {
        let config = CacheConfig {
            max_entries: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidCacheSize));
    }
}
