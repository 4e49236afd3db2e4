//! The scoring engine: a registry of factors and the evaluation that
//! combines them into an assessment.
//!
//! Evaluation takes `&self` and writes no shared state, so one engine can
//! serve many concurrent evaluations. Registration and configuration
//! changes take `&mut self`; callers that share an engine swap whole
//! snapshots instead of mutating it in place.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use super::config::{NormalizationMethod, ScoringConfig, FALLBACK_WEIGHT, SCORING_VERSION};
use super::factor::{FactorCategory, ScoringFactor};
use super::factors::default_factors;
use super::methodology::{FactorMethodology, Methodology, KNOWN_LIMITATIONS, SCIENTIFIC_REFERENCES};
use crate::domain::assessment::{FactorScore, HabitabilityAssessment};
use crate::domain::exoplanet::ExoplanetEntity;
use crate::domain::foundation::{AssessmentId, Timestamp};
use crate::domain::star::StarEntity;

/// Floor applied to each score in the geometric mean.
const GEOMETRIC_MEAN_FLOOR: f64 = 0.01;

#[derive(Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
    factors: BTreeMap<String, Arc<dyn ScoringFactor>>,
}

impl fmt::Debug for ScoringEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoringEngine")
            .field("config", &self.config)
            .field("factors", &self.factors.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::with_default_factors(ScoringConfig::default())
    }
}

impl ScoringEngine {
    pub const VERSION: &'static str = SCORING_VERSION;

    /// Engine with no factors registered.
    pub fn new(config: ScoringConfig) -> Self {
        info!(version = Self::VERSION, "Scoring engine initialized");
        Self {
            config,
            factors: BTreeMap::new(),
        }
    }

    /// Engine with all thirteen built-in factors registered.
    pub fn with_default_factors(config: ScoringConfig) -> Self {
        let mut engine = Self::new(config);
        for factor in default_factors() {
            engine.register(factor);
        }
        engine
    }

    /// Registers a factor under its id. An existing factor with the same
    /// id is replaced and returned.
    pub fn register(&mut self, factor: Arc<dyn ScoringFactor>) -> Option<Arc<dyn ScoringFactor>> {
        let factor_id = factor.factor_id().to_string();
        let replaced = self.factors.insert(factor_id.clone(), factor);
        if replaced.is_some() {
            warn!(factor_id = %factor_id, "Replacing existing scoring factor");
        } else {
            debug!(factor_id = %factor_id, "Registered scoring factor");
        }
        replaced
    }

    pub fn unregister_factor(&mut self, factor_id: &str) -> bool {
        let removed = self.factors.remove(factor_id).is_some();
        if removed {
            debug!(factor_id = %factor_id, "Unregistered scoring factor");
        }
        removed
    }

    /// Registered ids in sorted order.
    pub fn registered_factors(&self) -> Vec<&str> {
        self.factors.keys().map(String::as_str).collect()
    }

    pub fn factor(&self, factor_id: &str) -> Option<&Arc<dyn ScoringFactor>> {
        self.factors.get(factor_id)
    }

    pub fn factors_by_category(&self) -> BTreeMap<FactorCategory, Vec<&str>> {
        let mut grouped: BTreeMap<FactorCategory, Vec<&str>> = BTreeMap::new();
        for (factor_id, factor) in &self.factors {
            grouped.entry(factor.category()).or_default().push(factor_id);
        }
        grouped
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ScoringConfig) {
        self.config = config;
    }

    /// Evaluates every enabled factor and aggregates the results.
    ///
    /// Never fails: absent inputs become neutral, inapplicable scores and
    /// a factor that errors or panics is degraded to a neutral score with
    /// very low confidence.
    pub fn evaluate(&self, exoplanet: &ExoplanetEntity, star: &StarEntity) -> HabitabilityAssessment {
        info!(exoplanet = %exoplanet.name, "Starting habitability assessment");

        let normalized = self.config.normalize_weights();
        let mut factor_scores = Vec::with_capacity(self.factors.len());
        let mut missing_parameters = Vec::new();
        let mut applicable = 0usize;
        let mut attempted = 0usize;

        for (factor_id, factor) in &self.factors {
            if !self.config.is_factor_enabled(factor_id) {
                debug!(factor_id = %factor_id, "Skipping disabled factor");
                continue;
            }
            attempted += 1;

            let weight = normalized.get(factor_id).copied().unwrap_or(FALLBACK_WEIGHT);
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| factor.evaluate(exoplanet, star)));

            let mut score = match outcome {
                Ok(Ok(result)) => {
                    if result.is_applicable {
                        applicable += 1;
                    } else if let Some(field) = &result.missing_data {
                        missing_parameters.push(field.clone());
                    }
                    FactorScore::from_result(factor.as_ref(), result, weight)
                }
                Ok(Err(err)) => {
                    error!(factor_id = %factor_id, error = %err, "Error evaluating factor");
                    FactorScore::faulted(factor.as_ref(), weight, &err.to_string())
                }
                Err(payload) => {
                    let message = panic_message(payload.as_ref());
                    error!(factor_id = %factor_id, error = %message, "Factor panicked during evaluation");
                    FactorScore::faulted(factor.as_ref(), weight, &message)
                }
            };
            // The registry key is authoritative.
            score.factor_id.clone_from(factor_id);
            factor_scores.push(score);
        }

        let total_score = aggregate(self.config.normalization_method(), &factor_scores);
        let data_completeness = if attempted > 0 {
            applicable as f64 / attempted as f64
        } else {
            0.0
        };

        let sufficient_data = applicable >= self.config.minimum_factors();
        if !sufficient_data {
            warn!(
                exoplanet = %exoplanet.name,
                applicable,
                minimum = self.config.minimum_factors(),
                "Fewer applicable factors than required"
            );
        }

        info!(
            exoplanet = %exoplanet.name,
            score = total_score,
            completeness = data_completeness,
            "Assessment complete"
        );

        HabitabilityAssessment {
            id: AssessmentId::new(),
            exoplanet_id: exoplanet.id,
            exoplanet_name: exoplanet.name.clone(),
            host_star_name: star.name.clone(),
            total_score,
            factor_scores,
            data_completeness,
            missing_parameters,
            applicable_factors: applicable,
            sufficient_data,
            assessed_at: Timestamp::now(),
            scoring_version: Self::VERSION.to_string(),
        }
    }

    /// Describes the live registry; never cached.
    pub fn methodology(&self) -> Methodology {
        let factors = self
            .factors
            .iter()
            .map(|(factor_id, factor)| FactorMethodology {
                id: factor_id.clone(),
                name: factor.factor_name().to_string(),
                category: factor.category(),
                description: factor.description().to_string(),
                weight: self.config.get_weight(factor_id),
                enabled: self.config.is_factor_enabled(factor_id),
                references: factor.references().iter().map(|r| r.to_string()).collect(),
            })
            .collect::<Vec<_>>();

        Methodology {
            version: Self::VERSION.to_string(),
            normalization_method: self.config.normalization_method(),
            minimum_factors_required: self.config.minimum_factors(),
            total_factors: self.factors.len(),
            enabled_factors: factors.iter().filter(|f| f.enabled).count(),
            confidence_thresholds: *self.config.confidence_thresholds(),
            factors,
            references: SCIENTIFIC_REFERENCES.iter().map(|r| r.to_string()).collect(),
            limitations: KNOWN_LIMITATIONS.iter().map(|l| l.to_string()).collect(),
        }
    }
}

/// Combines factor scores into the total. Zero when there is nothing to
/// combine.
pub fn aggregate(method: NormalizationMethod, scores: &[FactorScore]) -> f64 {
    if scores.is_empty() {
        return 0.0;
    }
    match method {
        NormalizationMethod::WeightedAverage => {
            let total_weight: f64 = scores.iter().map(|s| s.weight).sum();
            if total_weight <= 0.0 {
                return 0.0;
            }
            scores.iter().map(|s| s.weighted_score).sum::<f64>() / total_weight
        }
        NormalizationMethod::GeometricMean => {
            let product: f64 = scores
                .iter()
                .map(|s| s.raw_score.max(GEOMETRIC_MEAN_FLOOR))
                .product();
            product.powf(1.0 / scores.len() as f64)
        }
        NormalizationMethod::Minimum => scores
            .iter()
            .map(|s| s.raw_score)
            .fold(f64::INFINITY, f64::min),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "factor panicked".to_string()
    }
}
