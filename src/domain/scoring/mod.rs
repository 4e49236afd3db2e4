//! Scoring module - Factor plug-ins, configuration and the engine.
//!
//! # Key Types
//!
//! - `ScoringFactor` - The extension point every factor implements
//! - `ScoringConfig` - Validated weights and aggregation settings
//! - `ScoringEngine` - Registry and evaluation orchestrator
//! - `Methodology` - Introspection of the live registry

mod config;
mod engine;
mod factor;
pub mod factors;
mod methodology;

pub use config::{
    ConfidenceThresholds, FactorWeight, NormalizationMethod, ScoringConfig, ScoringConfigError,
    DEFAULT_FACTOR_WEIGHTS, FALLBACK_WEIGHT, SCORING_VERSION,
};
pub use engine::{aggregate, ScoringEngine};
pub use factor::{
    interpolate_score, missing_data_result, FactorCategory, FactorError, FactorResult,
    ScoringFactor, NEUTRAL_SCORE,
};
pub use methodology::{FactorMethodology, Methodology, KNOWN_LIMITATIONS, SCIENTIFIC_REFERENCES};
