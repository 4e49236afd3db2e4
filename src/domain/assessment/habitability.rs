//! The habitability assessment aggregate.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{AssessmentReport, FactorScore, ScoreCategory};
use crate::domain::foundation::{AssessmentId, ConfidenceLevel, ExoplanetId, Timestamp};
use crate::domain::scoring::FactorCategory;

/// Attached to every assessment presented to a user.
pub const DISCLAIMER: &str = "IMPORTANT SCIENTIFIC DISCLAIMER: This habitability score is a \
    probabilistic indicator based on limited astrophysical parameters. It does NOT indicate \
    the detection of life, nor does it guarantee conditions suitable for life as we know it. \
    Many properties that matter for habitability, among them atmospheric composition, surface \
    conditions, magnetic field strength, geological activity and the presence of water, cannot \
    be determined from current observational data. The score estimates how Earth-like the \
    measurable parameters are and nothing more.";

/// Result of one engine evaluation. Built once and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitabilityAssessment {
    pub id: AssessmentId,
    pub exoplanet_id: Option<ExoplanetId>,
    pub exoplanet_name: String,
    pub host_star_name: String,
    pub total_score: f64,
    pub factor_scores: Vec<FactorScore>,
    /// Applicable factors over enabled factors attempted.
    pub data_completeness: f64,
    pub missing_parameters: Vec<String>,
    pub applicable_factors: usize,
    /// Whether at least the configured minimum of factors was applicable.
    pub sufficient_data: bool,
    pub assessed_at: Timestamp,
    pub scoring_version: String,
}

impl HabitabilityAssessment {
    pub const DISCLAIMER: &'static str = DISCLAIMER;

    pub fn score_category(&self) -> ScoreCategory {
        ScoreCategory::from_score(self.total_score)
    }

    /// Derived from data completeness alone; individual factor
    /// confidences do not enter.
    pub fn overall_confidence(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_completeness(self.data_completeness)
    }

    pub fn favorable_factors(&self) -> Vec<&FactorScore> {
        self.factor_scores.iter().filter(|f| f.is_favorable()).collect()
    }

    pub fn unfavorable_factors(&self) -> Vec<&FactorScore> {
        self.factor_scores.iter().filter(|f| !f.is_favorable()).collect()
    }

    pub fn factors_by_category(&self) -> BTreeMap<FactorCategory, Vec<&FactorScore>> {
        let mut grouped: BTreeMap<FactorCategory, Vec<&FactorScore>> = BTreeMap::new();
        for score in &self.factor_scores {
            grouped.entry(score.category).or_default().push(score);
        }
        grouped
    }

    pub fn factor_score(&self, factor_id: &str) -> Option<&FactorScore> {
        self.factor_scores.iter().find(|f| f.factor_id == factor_id)
    }

    /// Multi-line text summary, factors ordered by weighted contribution.
    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("Habitability Assessment for {}", self.exoplanet_name),
            "═".repeat(50),
            format!(
                "Overall Score: {:.2}% ({})",
                self.total_score * 100.0,
                self.score_category()
            ),
            format!("Data Completeness: {:.0}%", self.data_completeness * 100.0),
            format!("Confidence Level: {}", title_case(self.overall_confidence().as_str())),
            String::new(),
            "Factor Breakdown:".to_string(),
        ];

        let mut ordered: Vec<&FactorScore> = self.factor_scores.iter().collect();
        ordered.sort_by(|a, b| b.weighted_score.total_cmp(&a.weighted_score));
        for factor in ordered {
            let mark = if factor.is_favorable() { "✓" } else { "✗" };
            lines.push(format!(
                "  {} {}: {:.2}% (weight: {:.0}%)",
                mark,
                factor.factor_name,
                factor.raw_score * 100.0,
                factor.weight * 100.0
            ));
        }

        if !self.missing_parameters.is_empty() {
            lines.push(String::new());
            lines.push("Missing Data:".to_string());
            for parameter in &self.missing_parameters {
                lines.push(format!("  • {}", parameter));
            }
        }

        lines.join("\n")
    }

    pub fn methodology_summary(&self) -> String {
        let factors: Vec<String> = self
            .factor_scores
            .iter()
            .map(|f| format!("- {} (weight: {:.0}%)", f.factor_name, f.weight * 100.0))
            .collect();
        format!(
            "The habitability score (v{}) combines {} factors:\n{}\n\n\
             Each factor is scored on a 0-1 scale and combined using weights drawn from \
             the peer-reviewed literature.",
            self.scoring_version,
            self.factor_scores.len(),
            factors.join("\n")
        )
    }

    pub fn to_report(&self) -> AssessmentReport {
        AssessmentReport::from(self)
    }
}

fn title_case(snake: &str) -> String {
    snake
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::scoring::factors::{OrbitalEccentricityFactor, PlanetRadiusFactor, StellarTypeFactor};
    use crate::domain::scoring::FactorResult;

    pub(crate) fn sample_assessment() -> HabitabilityAssessment {
        let scores = vec![
            FactorScore::from_result(&StellarTypeFactor, FactorResult::new("stellar_type", 0.95), 0.4),
            FactorScore::from_result(&PlanetRadiusFactor, FactorResult::new("planet_radius", 0.3), 0.4),
            FactorScore::from_result(
                &OrbitalEccentricityFactor,
                FactorResult::missing_data("orbital_eccentricity", "orbital_eccentricity"),
                0.2,
            ),
        ];
        HabitabilityAssessment {
            id: AssessmentId::new(),
            exoplanet_id: Some(ExoplanetId::new()),
            exoplanet_name: "Kepler-442 b".to_string(),
            host_star_name: "Kepler-442".to_string(),
            total_score: 0.6,
            factor_scores: scores,
            data_completeness: 2.0 / 3.0,
            missing_parameters: vec!["orbital_eccentricity".to_string()],
            applicable_factors: 2,
            sufficient_data: false,
            assessed_at: Timestamp::from_unix_secs(1_700_000_000),
            scoring_version: "2.0.0".to_string(),
        }
    }

    #[test]
    fn category_and_confidence() {
        let assessment = sample_assessment();
        assert_eq!(assessment.score_category(), ScoreCategory::High);
        assert_eq!(assessment.overall_confidence(), ConfidenceLevel::High);
    }

    #[test]
    fn favourable_split() {
        let assessment = sample_assessment();
        let favourable: Vec<_> = assessment.favorable_factors().iter().map(|f| f.factor_id.as_str()).collect();
        assert_eq!(favourable, vec!["stellar_type", "orbital_eccentricity"]);
        assert_eq!(assessment.unfavorable_factors().len(), 1);
    }

    #[test]
    fn groups_by_category_in_enum_order() {
        let assessment = sample_assessment();
        let categories: Vec<_> = assessment.factors_by_category().keys().copied().collect();
        assert_eq!(
            categories,
            vec![FactorCategory::Stellar, FactorCategory::Planetary, FactorCategory::Orbital]
        );
    }

    #[test]
    fn summary_orders_by_contribution_and_lists_missing_data() {
        let summary = sample_assessment().summary();
        assert!(summary.starts_with("Habitability Assessment for Kepler-442 b"));
        assert!(summary.contains("Overall Score: 60.00% (High)"));
        assert!(summary.contains("Confidence Level: High"));
        let stellar = summary.find("Stellar Type").unwrap();
        let radius = summary.find("Planet Radius").unwrap();
        assert!(stellar < radius);
        assert!(summary.contains("Missing Data:\n  • orbital_eccentricity"));
    }

    #[test]
    fn methodology_summary_lists_every_factor() {
        let text = sample_assessment().methodology_summary();
        assert!(text.contains("v2.0.0"));
        assert!(text.contains("combines 3 factors"));
        assert!(text.contains("- Planet Radius (weight: 40%)"));
    }

    #[test]
    fn title_case_of_confidence_names() {
        assert_eq!(title_case("very_high"), "Very High");
        assert_eq!(title_case("medium"), "Medium");
    }

    #[test]
    fn disclaimer_is_attached() {
        assert!(HabitabilityAssessment::DISCLAIMER.starts_with("IMPORTANT SCIENTIFIC DISCLAIMER"));
    }
}
