//! Serializable presentation of an assessment.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{FactorScore, HabitabilityAssessment, ScoreCategory};
use crate::domain::foundation::{AssessmentId, ConfidenceLevel, ExoplanetId};
use crate::domain::scoring::FactorCategory;

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Per-factor entry of an [`AssessmentReport`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorReport {
    pub factor_id: String,
    pub factor_name: String,
    pub category: FactorCategory,
    pub score: f64,
    pub weight: f64,
    pub weighted_contribution: f64,
    pub input_value: Option<String>,
    pub input_unit: Option<String>,
    pub optimal_range: Option<String>,
    pub explanation: String,
    pub confidence: ConfidenceLevel,
    pub references: Vec<String>,
    pub is_applicable: bool,
}

impl From<&FactorScore> for FactorReport {
    fn from(score: &FactorScore) -> Self {
        Self {
            factor_id: score.factor_id.clone(),
            factor_name: score.factor_name.clone(),
            category: score.category,
            score: round4(score.raw_score),
            weight: round4(score.weight),
            weighted_contribution: round4(score.weighted_score),
            input_value: score.input_value.clone(),
            input_unit: score.input_unit.clone(),
            optimal_range: score.optimal_range.clone(),
            explanation: score.explanation.clone(),
            confidence: score.confidence,
            references: score.references.clone(),
            is_applicable: score.is_applicable,
        }
    }
}

/// Response shape for presentation layers. Numbers are rounded to four
/// decimals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub assessment_id: AssessmentId,
    pub exoplanet_id: Option<ExoplanetId>,
    pub exoplanet_name: String,
    pub host_star_name: String,
    pub total_score: f64,
    pub score_category: ScoreCategory,
    pub overall_confidence: ConfidenceLevel,
    pub factors: Vec<FactorReport>,
    pub factors_by_category: BTreeMap<FactorCategory, Vec<FactorReport>>,
    pub data_completeness: f64,
    pub missing_parameters: Vec<String>,
    pub sufficient_data: bool,
    pub assessment_timestamp: String,
    pub scoring_version: String,
    pub scientific_disclaimer: String,
    pub methodology_summary: String,
}

impl From<&HabitabilityAssessment> for AssessmentReport {
    fn from(assessment: &HabitabilityAssessment) -> Self {
        let factors_by_category = assessment
            .factors_by_category()
            .into_iter()
            .map(|(category, scores)| {
                (category, scores.into_iter().map(FactorReport::from).collect())
            })
            .collect();

        Self {
            assessment_id: assessment.id,
            exoplanet_id: assessment.exoplanet_id,
            exoplanet_name: assessment.exoplanet_name.clone(),
            host_star_name: assessment.host_star_name.clone(),
            total_score: round4(assessment.total_score),
            score_category: assessment.score_category(),
            overall_confidence: assessment.overall_confidence(),
            factors: assessment.factor_scores.iter().map(FactorReport::from).collect(),
            factors_by_category,
            data_completeness: round4(assessment.data_completeness),
            missing_parameters: assessment.missing_parameters.clone(),
            sufficient_data: assessment.sufficient_data,
            assessment_timestamp: assessment.assessed_at.to_rfc3339(),
            scoring_version: assessment.scoring_version.clone(),
            scientific_disclaimer: HabitabilityAssessment::DISCLAIMER.to_string(),
            methodology_summary: assessment.methodology_summary(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::habitability::tests::sample_assessment;

    #[test]
    fn rounds_to_four_decimals() {
        assert_eq!(round4(0.123456), 0.1235);
        assert_eq!(round4(2.0 / 3.0), 0.6667);
    }

    #[test]
    fn report_mirrors_assessment() {
        let assessment = sample_assessment();
        let report = assessment.to_report();
        assert_eq!(report.exoplanet_name, "Kepler-442 b");
        assert_eq!(report.score_category, ScoreCategory::High);
        assert_eq!(report.data_completeness, 0.6667);
        assert_eq!(report.factors.len(), 3);
        assert_eq!(report.factors_by_category.len(), 3);
        assert_eq!(report.assessment_timestamp, "2023-11-14T22:13:20Z");
        assert!(report.scientific_disclaimer.starts_with("IMPORTANT"));
        assert!(!report.factors[2].is_applicable);
    }

    #[test]
    fn serializes_category_keys_as_strings() {
        let report = sample_assessment().to_report();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json["factors_by_category"]["planetary"].is_array());
        assert_eq!(json["score_category"], "High");
        assert_eq!(json["overall_confidence"], "high");
    }
}
