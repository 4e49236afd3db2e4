//! ConfidenceLevel ordinal for factor results and assessments.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Five-band qualitative certainty indicator.
///
/// Ordered from least to most certain, so `VeryLow < VeryHigh`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceLevel {
    VeryLow,
    Low,
    #[default]
    Medium,
    High,
    VeryHigh,
}

impl ConfidenceLevel {
    /// All levels in ascending order.
    pub const ALL: [ConfidenceLevel; 5] = [
        ConfidenceLevel::VeryLow,
        ConfidenceLevel::Low,
        ConfidenceLevel::Medium,
        ConfidenceLevel::High,
        ConfidenceLevel::VeryHigh,
    ];

    /// Buckets a data-completeness fraction at 0.2 / 0.4 / 0.6 / 0.8.
    ///
    /// Lower bounds are inclusive. NaN is treated as no data.
    pub fn from_completeness(completeness: f64) -> Self {
        if completeness.is_nan() || completeness < 0.2 {
            ConfidenceLevel::VeryLow
        } else if completeness < 0.4 {
            ConfidenceLevel::Low
        } else if completeness < 0.6 {
            ConfidenceLevel::Medium
        } else if completeness < 0.8 {
            ConfidenceLevel::High
        } else {
            ConfidenceLevel::VeryHigh
        }
    }

    /// Stable snake_case identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfidenceLevel::VeryLow => "very_low",
            ConfidenceLevel::Low => "low",
            ConfidenceLevel::Medium => "medium",
            ConfidenceLevel::High => "high",
            ConfidenceLevel::VeryHigh => "very_high",
        }
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConfidenceLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfidenceLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ValidationError::invalid_format("confidence", format!("unknown level '{}'", s))
            })
    }
}
