//! Human-readable score bands.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Five bands over the total score, inclusive at the lower edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScoreCategory {
    #[serde(rename = "Very Low")]
    VeryLow,
    #[serde(rename = "Low")]
    Low,
    #[serde(rename = "Moderate")]
    Moderate,
    #[serde(rename = "High")]
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl ScoreCategory {
    pub const ALL: [ScoreCategory; 5] = [
        ScoreCategory::VeryLow,
        ScoreCategory::Low,
        ScoreCategory::Moderate,
        ScoreCategory::High,
        ScoreCategory::VeryHigh,
    ];

    pub fn from_score(score: f64) -> Self {
        if score >= 0.8 {
            ScoreCategory::VeryHigh
        } else if score >= 0.6 {
            ScoreCategory::High
        } else if score >= 0.4 {
            ScoreCategory::Moderate
        } else if score >= 0.2 {
            ScoreCategory::Low
        } else {
            ScoreCategory::VeryLow
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreCategory::VeryLow => "Very Low",
            ScoreCategory::Low => "Low",
            ScoreCategory::Moderate => "Moderate",
            ScoreCategory::High => "High",
            ScoreCategory::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for ScoreCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ScoreCategory {
    type Err = ValidationError;

    /// Accepts the label ("Very High") or its snake_case form ("very_high").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().replace('_', " ");
        ScoreCategory::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| {
                ValidationError::invalid_format("score_category", format!("unknown category '{}'", s))
            })
    }
}
