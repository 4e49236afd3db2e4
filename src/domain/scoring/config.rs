//! Scoring configuration: factor weights, aggregation method and
//! confidence thresholds.
//!
//! Weights are validated into [0, 1] when the configuration is built, so
//! an invalid table never reaches the engine. Normalized weights are
//! derived on demand.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Version stamped on configurations and assessments.
pub const SCORING_VERSION: &str = "2.0.0";

/// Weight given to a registered factor that the weight table does not
/// mention.
pub const FALLBACK_WEIGHT: f64 = 0.1;

/// Built-in weight table. Stellar 30%, planetary 40%, orbital 15%,
/// derived 15%.
pub const DEFAULT_FACTOR_WEIGHTS: [(&str, f64); 13] = [
    ("stellar_type", 0.12),
    ("stellar_luminosity", 0.08),
    ("stellar_age", 0.05),
    ("habitable_zone_position", 0.05),
    ("planet_radius", 0.12),
    ("planet_mass", 0.08),
    ("planet_density", 0.05),
    ("equilibrium_temperature", 0.10),
    ("surface_gravity", 0.05),
    ("orbital_eccentricity", 0.08),
    ("tidal_locking", 0.07),
    ("atmosphere_retention", 0.08),
    ("magnetic_field_potential", 0.07),
];

const DEFAULT_MINIMUM_FACTORS: usize = 3;

/// Errors raised while building or loading a scoring configuration.
#[derive(Debug, Error)]
pub enum ScoringConfigError {
    #[error("failed to access scoring config: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scoring config YAML: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("weight for factor '{factor_id}' must be between 0 and 1, got {weight}")]
    WeightOutOfRange { factor_id: String, weight: f64 },

    #[error("confidence threshold '{name}' must be between 0 and 1, got {value}")]
    InvalidThreshold { name: String, value: f64 },

    #[error("scoring config file not found: {}", .0.display())]
    NotFound(PathBuf),
}

// ════════════════════════════════════════════════════════════════════════════════
// Normalization method
// ════════════════════════════════════════════════════════════════════════════════

/// How factor scores are combined into the total score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMethod {
    /// Σ(score × weight) / Σ(weight).
    #[default]
    WeightedAverage,
    /// N-th root of the product of scores, each floored at 0.01.
    GeometricMean,
    /// The lowest factor score.
    Minimum,
}

impl NormalizationMethod {
    pub const ALL: [NormalizationMethod; 3] = [
        NormalizationMethod::WeightedAverage,
        NormalizationMethod::GeometricMean,
        NormalizationMethod::Minimum,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NormalizationMethod::WeightedAverage => "weighted_average",
            NormalizationMethod::GeometricMean => "geometric_mean",
            NormalizationMethod::Minimum => "minimum",
        }
    }

    /// Parses a method name; unrecognized names mean weighted average.
    pub fn from_name_or_default(name: &str) -> Self {
        name.parse().unwrap_or_default()
    }
}

impl fmt::Display for NormalizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NormalizationMethod {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NormalizationMethod::ALL
            .into_iter()
            .find(|m| m.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format(
                    "normalization_method",
                    format!("unknown method '{}'", s),
                )
            })
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Confidence thresholds
// ════════════════════════════════════════════════════════════════════════════════

/// Upper completeness bounds for each confidence level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceThresholds {
    #[serde(default = "default_very_low")]
    pub very_low: f64,
    #[serde(default = "default_low")]
    pub low: f64,
    #[serde(default = "default_medium")]
    pub medium: f64,
    #[serde(default = "default_high")]
    pub high: f64,
    #[serde(default = "default_very_high")]
    pub very_high: f64,
}

fn default_very_low() -> f64 {
    0.2
}

fn default_low() -> f64 {
    0.4
}

fn default_medium() -> f64 {
    0.6
}

fn default_high() -> f64 {
    0.8
}

fn default_very_high() -> f64 {
    1.0
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            very_low: default_very_low(),
            low: default_low(),
            medium: default_medium(),
            high: default_high(),
            very_high: default_very_high(),
        }
    }
}

impl ConfidenceThresholds {
    /// Named thresholds in ascending level order.
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("very_low", self.very_low),
            ("low", self.low),
            ("medium", self.medium),
            ("high", self.high),
            ("very_high", self.very_high),
        ]
    }

    pub fn validate(&self) -> Result<(), ScoringConfigError> {
        for (name, value) in self.entries() {
            if !(0.0..=1.0).contains(&value) {
                return Err(ScoringConfigError::InvalidThreshold {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Factor weights
// ════════════════════════════════════════════════════════════════════════════════

/// Weight, enablement and free-form parameters for one factor.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorWeight {
    weight: f64,
    enabled: bool,
    parameters: BTreeMap<String, serde_json::Value>,
}

impl FactorWeight {
    /// Enabled weight with no parameters.
    ///
    /// # Errors
    ///
    /// `WeightOutOfRange` if the weight is outside [0, 1] or NaN.
    pub fn new(factor_id: &str, weight: f64) -> Result<Self, ScoringConfigError> {
        if !(0.0..=1.0).contains(&weight) {
            return Err(ScoringConfigError::WeightOutOfRange {
                factor_id: factor_id.to_string(),
                weight,
            });
        }
        Ok(Self {
            weight,
            enabled: true,
            parameters: BTreeMap::new(),
        })
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_parameter(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.parameters.insert(key.into(), value);
        self
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn parameters(&self) -> &BTreeMap<String, serde_json::Value> {
        &self.parameters
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// File representation
// ════════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Default, Serialize, Deserialize)]
struct ScoringConfigFile {
    #[serde(default = "default_version")]
    version: String,
    #[serde(default)]
    factor_weights: BTreeMap<String, WeightEntry>,
    #[serde(default)]
    normalization_method: Option<String>,
    #[serde(default = "default_minimum_factors")]
    minimum_factors: usize,
    #[serde(default)]
    confidence_thresholds: ConfidenceThresholds,
}

fn default_version() -> String {
    SCORING_VERSION.to_string()
}

fn default_minimum_factors() -> usize {
    DEFAULT_MINIMUM_FACTORS
}

/// A weight table entry: either a bare number or a full mapping.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum WeightEntry {
    Bare(f64),
    Detailed {
        #[serde(default = "default_entry_weight")]
        weight: f64,
        #[serde(default = "default_enabled")]
        enabled: bool,
        #[serde(default)]
        parameters: BTreeMap<String, serde_json::Value>,
    },
}

fn default_entry_weight() -> f64 {
    FALLBACK_WEIGHT
}

fn default_enabled() -> bool {
    true
}

// ════════════════════════════════════════════════════════════════════════════════
// Scoring configuration
// ════════════════════════════════════════════════════════════════════════════════

/// Complete scoring configuration.
///
/// Every instance holds only validated weights and thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    version: String,
    factor_weights: BTreeMap<String, FactorWeight>,
    normalization_method: NormalizationMethod,
    minimum_factors: usize,
    confidence_thresholds: ConfidenceThresholds,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            version: SCORING_VERSION.to_string(),
            factor_weights: default_weight_table(),
            normalization_method: NormalizationMethod::default(),
            minimum_factors: DEFAULT_MINIMUM_FACTORS,
            confidence_thresholds: ConfidenceThresholds::default(),
        }
    }
}

fn default_weight_table() -> BTreeMap<String, FactorWeight> {
    DEFAULT_FACTOR_WEIGHTS
        .iter()
        .map(|(id, weight)| {
            (
                id.to_string(),
                FactorWeight {
                    weight: *weight,
                    enabled: true,
                    parameters: BTreeMap::new(),
                },
            )
        })
        .collect()
}

impl ScoringConfig {
    /// Replaces the whole weight table. An empty table means the default
    /// table.
    pub fn with_factor_weights(mut self, weights: BTreeMap<String, FactorWeight>) -> Self {
        self.factor_weights = if weights.is_empty() {
            default_weight_table()
        } else {
            weights
        };
        self
    }

    /// Adds or replaces one factor's weight.
    pub fn with_factor_weight(mut self, factor_id: impl Into<String>, weight: FactorWeight) -> Self {
        self.factor_weights.insert(factor_id.into(), weight);
        self
    }

    pub fn with_normalization_method(mut self, method: NormalizationMethod) -> Self {
        self.normalization_method = method;
        self
    }

    pub fn with_minimum_factors(mut self, minimum_factors: usize) -> Self {
        self.minimum_factors = minimum_factors;
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// # Errors
    ///
    /// `InvalidThreshold` if any threshold is outside [0, 1].
    pub fn with_confidence_thresholds(
        mut self,
        thresholds: ConfidenceThresholds,
    ) -> Result<Self, ScoringConfigError> {
        thresholds.validate()?;
        self.confidence_thresholds = thresholds;
        Ok(self)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn factor_weights(&self) -> &BTreeMap<String, FactorWeight> {
        &self.factor_weights
    }

    pub fn normalization_method(&self) -> NormalizationMethod {
        self.normalization_method
    }

    pub fn minimum_factors(&self) -> usize {
        self.minimum_factors
    }

    pub fn confidence_thresholds(&self) -> &ConfidenceThresholds {
        &self.confidence_thresholds
    }

    /// Configured weight, or 0 when the factor is disabled or unknown.
    pub fn get_weight(&self, factor_id: &str) -> f64 {
        match self.factor_weights.get(factor_id) {
            Some(entry) if entry.enabled => entry.weight,
            _ => 0.0,
        }
    }

    /// Unknown factors are enabled.
    pub fn is_factor_enabled(&self, factor_id: &str) -> bool {
        self.factor_weights
            .get(factor_id)
            .map_or(true, |entry| entry.enabled)
    }

    pub fn factor_parameters(&self, factor_id: &str) -> Option<&BTreeMap<String, serde_json::Value>> {
        self.factor_weights.get(factor_id).map(|entry| &entry.parameters)
    }

    pub fn enabled_factor_ids(&self) -> Vec<&str> {
        self.factor_weights
            .iter()
            .filter(|(_, entry)| entry.enabled)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Sum of enabled weights.
    pub fn total_weight(&self) -> f64 {
        self.factor_weights
            .values()
            .filter(|entry| entry.enabled)
            .map(|entry| entry.weight)
            .sum()
    }

    /// Enabled weights scaled to sum to 1. Empty when the total is zero.
    pub fn normalize_weights(&self) -> BTreeMap<String, f64> {
        let total = self.total_weight();
        if total <= 0.0 {
            return BTreeMap::new();
        }
        self.factor_weights
            .iter()
            .filter(|(_, entry)| entry.enabled)
            .map(|(id, entry)| (id.clone(), entry.weight / total))
            .collect()
    }

    // ────────────────────────────────────────────────────────────────────────────
    // YAML
    // ────────────────────────────────────────────────────────────────────────────

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ScoringConfigError> {
        // An empty document deserializes to unit, not to a mapping.
        let file: ScoringConfigFile = if yaml.trim().is_empty() {
            ScoringConfigFile {
                version: default_version(),
                minimum_factors: DEFAULT_MINIMUM_FACTORS,
                ..Default::default()
            }
        } else {
            serde_yaml::from_str(yaml)?
        };
        Self::try_from(file)
    }

    /// # Errors
    ///
    /// `NotFound` if the path does not exist, otherwise any parse or
    /// validation error.
    pub fn load_yaml(path: impl AsRef<Path>) -> Result<Self, ScoringConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ScoringConfigError::NotFound(path.to_path_buf()));
        }
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Every key is written, including defaults.
    pub fn to_yaml_string(&self) -> Result<String, ScoringConfigError> {
        Ok(serde_yaml::to_string(&ScoringConfigFile::from(self))?)
    }

    /// Writes the configuration, creating parent directories.
    pub fn save_yaml(&self, path: impl AsRef<Path>) -> Result<(), ScoringConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml_string()?)?;
        Ok(())
    }
}

impl TryFrom<ScoringConfigFile> for ScoringConfig {
    type Error = ScoringConfigError;

    fn try_from(file: ScoringConfigFile) -> Result<Self, Self::Error> {
        let mut weights = BTreeMap::new();
        for (factor_id, entry) in file.factor_weights {
            let weight = match entry {
                WeightEntry::Bare(weight) => FactorWeight::new(&factor_id, weight)?,
                WeightEntry::Detailed {
                    weight,
                    enabled,
                    parameters,
                } => {
                    let mut fw = FactorWeight::new(&factor_id, weight)?.with_enabled(enabled);
                    fw.parameters = parameters;
                    fw
                }
            };
            weights.insert(factor_id, weight);
        }

        let method = file
            .normalization_method
            .as_deref()
            .map(NormalizationMethod::from_name_or_default)
            .unwrap_or_default();

        ScoringConfig::default()
            .with_version(file.version)
            .with_factor_weights(weights)
            .with_normalization_method(method)
            .with_minimum_factors(file.minimum_factors)
            .with_confidence_thresholds(file.confidence_thresholds)
    }
}

impl From<&ScoringConfig> for ScoringConfigFile {
    fn from(config: &ScoringConfig) -> Self {
        Self {
            version: config.version.clone(),
            factor_weights: config
                .factor_weights
                .iter()
                .map(|(id, entry)| {
                    (
                        id.clone(),
                        WeightEntry::Detailed {
                            weight: entry.weight,
                            enabled: entry.enabled,
                            parameters: entry.parameters.clone(),
                        },
                    )
                })
                .collect(),
            normalization_method: Some(config.normalization_method.as_str().to_string()),
            minimum_factors: config.minimum_factors,
            confidence_thresholds: config.confidence_thresholds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ─────────────────────────────────────────────────────────────────────
    // Defaults
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn default_table_has_thirteen_factors_summing_to_one() {
        let config = ScoringConfig::default();
        assert_eq!(config.factor_weights().len(), 13);
        assert!((config.total_weight() - 1.0).abs() < 1e-9);
        assert_eq!(config.version(), "2.0.0");
        assert_eq!(config.minimum_factors(), 3);
        assert_eq!(config.normalization_method(), NormalizationMethod::WeightedAverage);
    }

    #[test]
    fn default_category_shares() {
        let config = ScoringConfig::default();
        let share = |ids: &[&str]| ids.iter().map(|id| config.get_weight(id)).sum::<f64>();
        let stellar = share(&["stellar_type", "stellar_luminosity", "stellar_age", "habitable_zone_position"]);
        let orbital = share(&["orbital_eccentricity", "tidal_locking"]);
        assert!((stellar - 0.30).abs() < 1e-9);
        assert!((orbital - 0.15).abs() < 1e-9);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Weight lookup
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn disabled_and_unknown_factors_have_zero_weight() {
        let config = ScoringConfig::default().with_factor_weight(
            "tidal_locking",
            FactorWeight::new("tidal_locking", 0.07).unwrap().with_enabled(false),
        );
        assert_eq!(config.get_weight("tidal_locking"), 0.0);
        assert!(!config.is_factor_enabled("tidal_locking"));
        assert_eq!(config.get_weight("cloud_cover"), 0.0);
        assert!(config.is_factor_enabled("cloud_cover"));
        assert_eq!(config.enabled_factor_ids().len(), 12);
    }

    #[test]
    fn normalized_weights_sum_to_one() {
        let config = ScoringConfig::default().with_factor_weights(BTreeMap::from([
            ("a".to_string(), FactorWeight::new("a", 0.2).unwrap()),
            ("b".to_string(), FactorWeight::new("b", 0.6).unwrap()),
        ]));
        let normalized = config.normalize_weights();
        assert!((normalized["a"] - 0.25).abs() < 1e-12);
        assert!((normalized["b"] - 0.75).abs() < 1e-12);
    }

    #[test]
    fn normalization_is_empty_when_nothing_carries_weight() {
        let config = ScoringConfig::default().with_factor_weights(BTreeMap::from([
            ("a".to_string(), FactorWeight::new("a", 0.0).unwrap()),
            ("b".to_string(), FactorWeight::new("b", 0.5).unwrap().with_enabled(false)),
        ]));
        assert!(config.normalize_weights().is_empty());
    }

    #[test]
    fn out_of_range_weight_is_rejected() {
        let err = FactorWeight::new("planet_radius", 1.5).unwrap_err();
        assert!(matches!(
            err,
            ScoringConfigError::WeightOutOfRange { ref factor_id, .. } if factor_id == "planet_radius"
        ));
        assert!(FactorWeight::new("x", -0.1).is_err());
        assert!(FactorWeight::new("x", f64::NAN).is_err());
    }

    #[test]
    fn invalid_threshold_is_rejected() {
        let thresholds = ConfidenceThresholds {
            high: 1.2,
            ..Default::default()
        };
        let err = ScoringConfig::default()
            .with_confidence_thresholds(thresholds)
            .unwrap_err();
        assert!(matches!(err, ScoringConfigError::InvalidThreshold { ref name, .. } if name == "high"));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Normalization method
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn unknown_method_falls_back_to_weighted_average() {
        assert_eq!(
            NormalizationMethod::from_name_or_default("harmonic_mean"),
            NormalizationMethod::WeightedAverage
        );
        assert_eq!(
            NormalizationMethod::from_name_or_default("Geometric_Mean"),
            NormalizationMethod::GeometricMean
        );
        assert!("harmonic_mean".parse::<NormalizationMethod>().is_err());
    }

    #[test]
    fn method_serializes_to_snake_case_json() {
        let json = serde_json::to_string(&NormalizationMethod::GeometricMean).unwrap();
        assert_eq!(json, "\"geometric_mean\"");
    }

    // ─────────────────────────────────────────────────────────────────────
    // YAML
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn parses_bare_and_detailed_entries() {
        let yaml = r#"
version: "2.1.0"
factor_weights:
  planet_radius: 0.5
  tidal_locking:
    enabled: false
  custom_factor:
    weight: 0.3
    parameters:
      optimum: 1.2
normalization_method: minimum
minimum_factors: 5
"#;
        let config = ScoringConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.version(), "2.1.0");
        assert_eq!(config.factor_weights().len(), 3);
        assert_eq!(config.get_weight("planet_radius"), 0.5);
        assert!(!config.is_factor_enabled("tidal_locking"));
        assert_eq!(config.factor_weights()["tidal_locking"].weight(), 0.1);
        assert_eq!(
            config.factor_parameters("custom_factor").unwrap()["optimum"],
            serde_json::json!(1.2)
        );
        assert_eq!(config.normalization_method(), NormalizationMethod::Minimum);
        assert_eq!(config.minimum_factors(), 5);
        assert_eq!(config.confidence_thresholds(), &ConfidenceThresholds::default());
    }

    #[test]
    fn empty_document_gives_defaults() {
        assert_eq!(ScoringConfig::from_yaml_str("").unwrap(), ScoringConfig::default());
        assert_eq!(
            ScoringConfig::from_yaml_str("factor_weights: {}\n").unwrap(),
            ScoringConfig::default()
        );
    }

    #[test]
    fn unknown_method_in_file_is_not_an_error() {
        let config = ScoringConfig::from_yaml_str("normalization_method: median\n").unwrap();
        assert_eq!(config.normalization_method(), NormalizationMethod::WeightedAverage);
    }

    #[test]
    fn out_of_range_weight_in_file_fails_to_load() {
        let err = ScoringConfig::from_yaml_str("factor_weights:\n  planet_mass: 2.0\n").unwrap_err();
        assert!(matches!(err, ScoringConfigError::WeightOutOfRange { .. }));
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let err = ScoringConfig::from_yaml_str("factor_weights: [1, 2").unwrap_err();
        assert!(matches!(err, ScoringConfigError::Parse(_)));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("scoring.yaml");
        let config = ScoringConfig::default()
            .with_factor_weight(
                "planet_radius",
                FactorWeight::new("planet_radius", 0.2)
                    .unwrap()
                    .with_parameter("optimum", serde_json::json!(1.0)),
            )
            .with_normalization_method(NormalizationMethod::GeometricMean)
            .with_minimum_factors(4);

        config.save_yaml(&path).unwrap();
        let loaded = ScoringConfig::load_yaml(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = ScoringConfig::load_yaml(dir.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(err, ScoringConfigError::NotFound(_)));
    }

    proptest! {
        #[test]
        fn normalized_weights_always_sum_to_one(weights in proptest::collection::vec(0.0f64..=1.0, 1..20)) {
            let table: BTreeMap<String, FactorWeight> = weights
                .iter()
                .enumerate()
                .map(|(i, w)| (format!("f{}", i), FactorWeight::new("f", *w).unwrap()))
                .collect();
            let config = ScoringConfig::default().with_factor_weights(table);
            let normalized = config.normalize_weights();
            if config.total_weight() > 0.0 {
                let sum: f64 = normalized.values().sum();
                prop_assert!((sum - 1.0).abs() < 1e-9);
            } else {
                prop_assert!(normalized.is_empty());
            }
        }
    }
}
