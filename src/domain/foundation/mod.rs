//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, and error types
//! that form the vocabulary of the habitability domain.

mod confidence;
mod errors;
mod ids;
mod timestamp;

pub use confidence::ConfidenceLevel;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{AssessmentId, ExoplanetId};
pub use timestamp::Timestamp;
