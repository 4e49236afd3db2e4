//! Methodology introspection: a snapshot of the live factor registry and
//! its configuration.

use serde::{Deserialize, Serialize};

use super::config::{ConfidenceThresholds, NormalizationMethod};
use super::factor::FactorCategory;

/// Literature underpinning the overall approach.
pub const SCIENTIFIC_REFERENCES: [&str; 7] = [
    "Kasting, J.F. et al. (1993) - Habitable Zones around Main Sequence Stars",
    "Kopparapu, R.K. et al. (2013) - Habitable Zone Calculations",
    "Fulton, B.J. et al. (2017) - The California-Kepler Survey",
    "Chen, J. & Kipping, D. (2017) - Probabilistic Forecasting of Planet Masses",
    "Lingam, M. & Loeb, A. (2019) - Life in the Cosmos",
    "Barnes, R. (2017) - Tidal Locking of Habitable Exoplanets",
    "Cockell, C.S. et al. (2016) - Habitability: A Review",
];

pub const KNOWN_LIMITATIONS: [&str; 8] = [
    "Atmospheric composition is unknown for most exoplanets",
    "Magnetic fields are inferred from bulk planetary properties only",
    "Surface conditions are approximated by the equilibrium temperature",
    "Multiple-star systems may have dynamics the factors do not capture",
    "Age-dependent factors inherit the large uncertainty of stellar ages",
    "Tidal effects are approximated and ignore spin-orbit resonances",
    "Only life as we know it is considered; alternative biochemistries are out of scope",
    "Scores are much less reliable when data completeness is low",
];

/// Description of one registered factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorMethodology {
    pub id: String,
    pub name: String,
    pub category: FactorCategory,
    pub description: String,
    /// Configured (not normalized) weight; 0 when disabled or unconfigured.
    pub weight: f64,
    pub enabled: bool,
    pub references: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Methodology {
    pub version: String,
    pub normalization_method: NormalizationMethod,
    pub minimum_factors_required: usize,
    pub total_factors: usize,
    pub enabled_factors: usize,
    pub confidence_thresholds: ConfidenceThresholds,
    pub factors: Vec<FactorMethodology>,
    pub references: Vec<String>,
    pub limitations: Vec<String>,
}
