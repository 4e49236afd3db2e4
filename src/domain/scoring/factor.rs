//! The factor extension point: `ScoringFactor`, `FactorResult` and the
//! helpers every factor implementation shares.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::domain::exoplanet::ExoplanetEntity;
use crate::domain::foundation::{ConfidenceLevel, ValidationError};
use crate::domain::star::StarEntity;

/// Neutral score used for missing data and faulted factors.
pub const NEUTRAL_SCORE: f64 = 0.5;

/// Grouping of factors, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorCategory {
    /// Host star properties.
    Stellar,
    /// Planet physical properties.
    Planetary,
    /// Orbital characteristics.
    Orbital,
    /// Quantities estimated from other parameters.
    Derived,
}

impl FactorCategory {
    pub const ALL: [FactorCategory; 4] = [
        FactorCategory::Stellar,
        FactorCategory::Planetary,
        FactorCategory::Orbital,
        FactorCategory::Derived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FactorCategory::Stellar => "stellar",
            FactorCategory::Planetary => "planetary",
            FactorCategory::Orbital => "orbital",
            FactorCategory::Derived => "derived",
        }
    }
}

impl fmt::Display for FactorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FactorCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FactorCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format("category", format!("unknown category '{}'", s))
            })
    }
}

/// Raised by a factor that detects an internal inconsistency.
///
/// The engine degrades the factor instead of failing the assessment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FactorError {
    #[error("{0}")]
    Computation(String),
}

/// Outcome of evaluating one factor.
///
/// The score is clamped into [0, 1] on construction; NaN becomes neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorResult {
    pub factor_id: String,
    pub score: f64,
    pub input_value: Option<String>,
    pub input_unit: Option<String>,
    pub optimal_range: Option<String>,
    pub explanation: String,
    pub confidence: ConfidenceLevel,
    pub references: Vec<String>,
    pub is_applicable: bool,
    pub missing_data: Option<String>,
}

impl FactorResult {
    pub fn new(factor_id: impl Into<String>, score: f64) -> Self {
        Self {
            factor_id: factor_id.into(),
            score: clamp_score(score),
            input_value: None,
            input_unit: None,
            optimal_range: None,
            explanation: "No evaluation performed".to_string(),
            confidence: ConfidenceLevel::Low,
            references: Vec::new(),
            is_applicable: true,
            missing_data: None,
        }
    }

    /// Inapplicable result: neutral score, very low confidence.
    pub fn missing_data(factor_id: impl Into<String>, missing_field: impl Into<String>) -> Self {
        let missing_field = missing_field.into();
        Self {
            explanation: format!(
                "Required data '{}' is not available. Assigned neutral score.",
                missing_field
            ),
            confidence: ConfidenceLevel::VeryLow,
            is_applicable: false,
            missing_data: Some(missing_field),
            ..Self::new(factor_id, NEUTRAL_SCORE)
        }
    }

    pub fn with_input(mut self, value: impl Into<String>, unit: impl Into<String>) -> Self {
        self.input_value = Some(value.into());
        let unit = unit.into();
        self.input_unit = if unit.is_empty() { None } else { Some(unit) };
        self
    }

    pub fn with_optimal_range(mut self, range: impl Into<String>) -> Self {
        self.optimal_range = Some(range.into());
        self
    }

    pub fn with_explanation(mut self, explanation: impl Into<String>) -> Self {
        self.explanation = explanation.into();
        self
    }

    pub fn with_confidence(mut self, confidence: ConfidenceLevel) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_references(mut self, references: &[&str]) -> Self {
        self.references = references.iter().map(|r| r.to_string()).collect();
        self
    }
}

fn clamp_score(score: f64) -> f64 {
    if score.is_nan() {
        NEUTRAL_SCORE
    } else {
        score.clamp(0.0, 1.0)
    }
}

/// A pluggable unit of habitability evaluation.
///
/// `factor_id` is the stable key used for weight lookup and caching.
/// `evaluate` must be pure: identical inputs give identical results.
/// Absent inputs are reported through [`missing_data_result`], never
/// through an error.
pub trait ScoringFactor: Send + Sync {
    fn factor_id(&self) -> &str;

    fn factor_name(&self) -> &str;

    fn category(&self) -> FactorCategory;

    fn description(&self) -> &str;

    fn references(&self) -> &[&str] {
        &[]
    }

    fn evaluate(
        &self,
        exoplanet: &ExoplanetEntity,
        star: &StarEntity,
    ) -> Result<FactorResult, FactorError>;
}

/// Shorthand used by factor implementations for an absent input.
pub fn missing_data_result(factor: &dyn ScoringFactor, missing_field: &str) -> FactorResult {
    FactorResult::missing_data(factor.factor_id(), missing_field)
}

/// 1.0 inside the optimal range, falling linearly to 0.0 at the
/// absolute limits.
pub fn interpolate_score(
    value: f64,
    optimal_min: f64,
    optimal_max: f64,
    absolute_min: f64,
    absolute_max: f64,
) -> f64 {
    if (optimal_min..=optimal_max).contains(&value) {
        1.0
    } else if value < optimal_min {
        if value <= absolute_min {
            0.0
        } else {
            (value - absolute_min) / (optimal_min - absolute_min)
        }
    } else if value > optimal_max {
        if value >= absolute_max {
            0.0
        } else {
            (absolute_max - value) / (absolute_max - optimal_max)
        }
    } else {
        NEUTRAL_SCORE
    }
}

/// Picks the score of the first band whose exclusive upper bound is
/// above `value`, or `otherwise` when none is.
pub(crate) fn banded_score(value: f64, bands: &[(f64, f64)], otherwise: f64) -> f64 {
    bands
        .iter()
        .find(|(upper, _)| value < *upper)
        .map(|(_, score)| *score)
        .unwrap_or(otherwise)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    struct Fixture;

    impl ScoringFactor for Fixture {
        fn factor_id(&self) -> &str {
            "fixture"
        }
        fn factor_name(&self) -> &str {
            "Fixture"
        }
        fn category(&self) -> FactorCategory {
            FactorCategory::Derived
        }
        fn description(&self) -> &str {
            "test fixture"
        }
        fn evaluate(&self, _: &ExoplanetEntity, _: &StarEntity) -> Result<FactorResult, FactorError> {
            Ok(FactorResult::new(self.factor_id(), 1.0))
        }
    }

    #[test]
    fn new_result_is_applicable_with_low_confidence() {
        let result = FactorResult::new("x", 0.7);
        assert!(result.is_applicable);
        assert_eq!(result.confidence, ConfidenceLevel::Low);
        assert_eq!(result.score, 0.7);
    }

    #[test]
    fn scores_are_clamped() {
        assert_eq!(FactorResult::new("x", 1.7).score, 1.0);
        assert_eq!(FactorResult::new("x", -0.2).score, 0.0);
        assert_eq!(FactorResult::new("x", f64::NAN).score, NEUTRAL_SCORE);
        assert_eq!(FactorResult::new("x", f64::INFINITY).score, 1.0);
    }

    #[test]
    fn missing_data_result_is_neutral_and_inapplicable() {
        let result = missing_data_result(&Fixture, "planet_radius_earth");
        assert_eq!(result.factor_id, "fixture");
        assert_eq!(result.score, NEUTRAL_SCORE);
        assert_eq!(result.confidence, ConfidenceLevel::VeryLow);
        assert!(!result.is_applicable);
        assert_eq!(result.missing_data.as_deref(), Some("planet_radius_earth"));
        assert!(result.explanation.contains("planet_radius_earth"));
    }

    #[test]
    fn builder_sets_display_fields() {
        let result = FactorResult::new("x", 0.9)
            .with_input("1.00", "R⊕")
            .with_optimal_range("0.8 - 1.25 R⊕")
            .with_explanation("Earth-like")
            .with_confidence(ConfidenceLevel::High)
            .with_references(&["Fulton et al. (2017)"]);
        assert_eq!(result.input_value.as_deref(), Some("1.00"));
        assert_eq!(result.input_unit.as_deref(), Some("R⊕"));
        assert_eq!(result.references.len(), 1);
        assert_eq!(result.confidence, ConfidenceLevel::High);
    }

    #[test]
    fn empty_unit_is_omitted() {
        let result = FactorResult::new("x", 0.5).with_input("0.017", "");
        assert!(result.input_unit.is_none());
    }

    #[test]
    fn interpolate_score_shape() {
        assert_eq!(interpolate_score(5.0, 4.0, 6.0, 0.0, 10.0), 1.0);
        assert_eq!(interpolate_score(2.0, 4.0, 6.0, 0.0, 10.0), 0.5);
        assert_eq!(interpolate_score(8.0, 4.0, 6.0, 0.0, 10.0), 0.5);
        assert_eq!(interpolate_score(-1.0, 4.0, 6.0, 0.0, 10.0), 0.0);
        assert_eq!(interpolate_score(12.0, 4.0, 6.0, 0.0, 10.0), 0.0);
    }

    #[test]
    fn banded_score_uses_exclusive_upper_bounds() {
        let bands = [(1.0, 0.1), (2.0, 0.2)];
        assert_eq!(banded_score(0.99, &bands, 0.3), 0.1);
        assert_eq!(banded_score(1.0, &bands, 0.3), 0.2);
        assert_eq!(banded_score(2.0, &bands, 0.3), 0.3);
    }

    #[test]
    fn category_parses_and_orders() {
        assert_eq!("Orbital".parse::<FactorCategory>().unwrap(), FactorCategory::Orbital);
        assert!("atmospheric".parse::<FactorCategory>().is_err());
        assert!(FactorCategory::Stellar < FactorCategory::Derived);
    }

    #[test]
    fn default_references_are_empty() {
        assert!(Fixture.references().is_empty());
    }

    proptest! {
        #[test]
        fn constructed_score_is_always_in_unit_interval(score in proptest::num::f64::ANY) {
            let result = FactorResult::new("x", score);
            prop_assert!((0.0..=1.0).contains(&result.score));
        }

        #[test]
        fn interpolated_score_is_in_unit_interval(value in -100.0f64..100.0) {
            let score = interpolate_score(value, 4.0, 6.0, 0.0, 10.0);
            prop_assert!((0.0..=1.0).contains(&score));
        }
    }
}
