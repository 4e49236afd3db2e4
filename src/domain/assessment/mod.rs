//! Assessment module - The structured output of a scoring run.
//!
//! A `HabitabilityAssessment` is created fresh for every engine
//! evaluation and never mutated afterwards. `AssessmentReport` is its
//! rounded, serializable presentation.

mod category;
mod factor_score;
pub(crate) mod habitability;
mod report;

pub use category::ScoreCategory;
pub use factor_score::FactorScore;
pub use habitability::{HabitabilityAssessment, DISCLAIMER};
pub use report::{AssessmentReport, FactorReport};
