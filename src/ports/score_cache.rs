//! Score cache port.
//!
//! Only derived values are cached, never the full assessment. Keys are
//! content hashes, so any change to the planet, the star, the weights or
//! the registered factors produces a fresh key and stale entries simply
//! stop being hit.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::assessment::{HabitabilityAssessment, ScoreCategory};
use crate::domain::exoplanet::ExoplanetEntity;
use crate::domain::foundation::{DomainError, ErrorCode, ExoplanetId, Timestamp};
use crate::domain::scoring::ScoringEngine;
use crate::domain::star::StarEntity;

/// Cache port for derived scores.
#[async_trait]
pub trait ScoreCache: Send + Sync {
    /// Returns `None` on a miss or an expired entry.
    async fn get(&self, key: &str) -> Result<Option<CachedScore>, DomainError>;

    async fn put(&self, key: String, score: CachedScore) -> Result<(), DomainError>;

    /// Returns whether an entry was removed.
    async fn invalidate(&self, key: &str) -> Result<bool, DomainError>;

    async fn clear(&self) -> Result<(), DomainError>;
}

/// The derived values of one assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedScore {
    pub exoplanet_id: Option<ExoplanetId>,
    pub total_score: f64,
    pub score_category: ScoreCategory,
    pub data_completeness: f64,
    pub scoring_version: String,
    pub cached_at: Timestamp,
}

impl From<&HabitabilityAssessment> for CachedScore {
    fn from(assessment: &HabitabilityAssessment) -> Self {
        Self {
            exoplanet_id: assessment.exoplanet_id,
            total_score: assessment.total_score,
            score_category: assessment.score_category(),
            data_completeness: assessment.data_completeness,
            scoring_version: assessment.scoring_version.clone(),
            cached_at: Timestamp::now(),
        }
    }
}

/// Hex SHA-256 over the planet JSON, the star JSON, the engine's config
/// YAML and its registered factor ids (sorted).
pub fn score_cache_key(
    exoplanet: &ExoplanetEntity,
    star: &StarEntity,
    engine: &ScoringEngine,
) -> Result<String, DomainError> {
    let planet_json = serde_json::to_vec(exoplanet).map_err(cache_key_error)?;
    let star_json = serde_json::to_vec(star).map_err(cache_key_error)?;
    let config_yaml = engine.config().to_yaml_string().map_err(cache_key_error)?;
    let factor_ids = engine.registered_factors().join(",");

    let mut hasher = Sha256::new();
    hasher.update(&planet_json);
    hasher.update(b"\n");
    hasher.update(&star_json);
    hasher.update(b"\n");
    hasher.update(config_yaml.as_bytes());
    hasher.update(b"\n");
    hasher.update(factor_ids.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

fn cache_key_error(err: impl std::fmt::Display) -> DomainError {
    DomainError::new(ErrorCode::CacheError, format!("Failed to build cache key: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::exoplanet::PhysicalParameters;
    use crate::domain::scoring::{FactorWeight, NormalizationMethod, ScoringConfig};

    fn engine(config: ScoringConfig) -> ScoringEngine {
        ScoringEngine::with_default_factors(config)
    }

    fn inputs() -> (ExoplanetEntity, StarEntity) {
        let planet = ExoplanetEntity::new("Kepler-22 b").with_physical(PhysicalParameters {
            radius_earth: Some(2.4),
            ..Default::default()
        });
        (planet, StarEntity::new("Kepler-22"))
    }

    #[test]
    fn key_is_stable_hex_sha256() {
        let (planet, star) = inputs();
        let engine = ScoringEngine::default();
        let first = score_cache_key(&planet, &star, &engine).unwrap();
        let second = score_cache_key(&planet, &star, &engine).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.len(), 64);
        assert!(first.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn key_changes_with_data() {
        let (planet, star) = inputs();
        let engine = ScoringEngine::default();
        let base = score_cache_key(&planet, &star, &engine).unwrap();

        let mut heavier = planet.clone();
        heavier.physical.mass_earth = Some(9.0);
        assert_ne!(base, score_cache_key(&heavier, &star, &engine).unwrap());

        let mut hotter = star.clone();
        hotter.temperature_k = Some(5500.0);
        assert_ne!(base, score_cache_key(&planet, &hotter, &engine).unwrap());
    }

    #[test]
    fn key_changes_with_weights_and_method() {
        let (planet, star) = inputs();
        let base = score_cache_key(&planet, &star, &ScoringEngine::default()).unwrap();

        let reweighted = ScoringConfig::default()
            .with_factor_weight("planet_radius", FactorWeight::new("planet_radius", 0.5).unwrap());
        assert_ne!(base, score_cache_key(&planet, &star, &engine(reweighted)).unwrap());

        let minimum = ScoringConfig::default().with_normalization_method(NormalizationMethod::Minimum);
        assert_ne!(base, score_cache_key(&planet, &star, &engine(minimum)).unwrap());
    }

    #[test]
    fn key_changes_with_registered_factors() {
        let (planet, star) = inputs();
        let mut engine = ScoringEngine::default();
        let base = score_cache_key(&planet, &star, &engine).unwrap();

        assert!(engine.unregister_factor("tidal_locking"));
        let without = score_cache_key(&planet, &star, &engine).unwrap();
        assert_ne!(base, without);
        assert_eq!(engine.config(), ScoringEngine::default().config());
    }
}
