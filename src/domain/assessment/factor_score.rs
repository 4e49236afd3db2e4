//! One factor's contribution to an assessment.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ConfidenceLevel;
use crate::domain::scoring::{FactorCategory, FactorResult, ScoringFactor, NEUTRAL_SCORE};

/// A factor result with its normalized weight applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorScore {
    pub factor_id: String,
    pub factor_name: String,
    pub category: FactorCategory,
    pub raw_score: f64,
    pub weight: f64,
    /// raw_score × weight.
    pub weighted_score: f64,
    pub input_value: Option<String>,
    pub input_unit: Option<String>,
    pub optimal_range: Option<String>,
    pub explanation: String,
    pub confidence: ConfidenceLevel,
    pub references: Vec<String>,
    pub is_applicable: bool,
}

impl FactorScore {
    /// Applies `weight` to a successful evaluation. Falls back to the
    /// factor's own references when the result carries none.
    pub fn from_result(factor: &dyn ScoringFactor, result: FactorResult, weight: f64) -> Self {
        let references = if result.references.is_empty() {
            factor.references().iter().map(|r| r.to_string()).collect()
        } else {
            result.references
        };

        Self {
            factor_id: factor.factor_id().to_string(),
            factor_name: factor.factor_name().to_string(),
            category: factor.category(),
            raw_score: result.score,
            weight,
            weighted_score: result.score * weight,
            input_value: result.input_value,
            input_unit: result.input_unit,
            optimal_range: result.optimal_range,
            explanation: result.explanation,
            confidence: result.confidence,
            references,
            is_applicable: result.is_applicable,
        }
    }

    /// Neutral stand-in for a factor whose evaluation failed.
    pub fn faulted(factor: &dyn ScoringFactor, weight: f64, message: &str) -> Self {
        Self {
            factor_id: factor.factor_id().to_string(),
            factor_name: factor.factor_name().to_string(),
            category: factor.category(),
            raw_score: NEUTRAL_SCORE,
            weight,
            weighted_score: NEUTRAL_SCORE * weight,
            input_value: None,
            input_unit: None,
            optimal_range: None,
            explanation: format!("Error during evaluation: {}", message),
            confidence: ConfidenceLevel::VeryLow,
            references: Vec::new(),
            is_applicable: false,
        }
    }

    pub fn score_percentage(&self) -> f64 {
        self.raw_score * 100.0
    }

    /// Scores of 0.5 and above count in the planet's favour.
    pub fn is_favorable(&self) -> bool {
        self.raw_score >= 0.5
    }
}
