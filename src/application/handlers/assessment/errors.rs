//! Error type shared by the assessment handlers.

use crate::domain::foundation::{DomainError, ErrorCode, ExoplanetId, ValidationError};

#[derive(Debug, Clone)]
pub enum AssessmentError {
    /// No record with this id.
    ExoplanetNotFound(ExoplanetId),
    /// The stored record cannot be turned into entities.
    InvalidRecord(ValidationError),
    /// Reader failure.
    Repository(DomainError),
    /// Cache failure on an explicit cache query.
    Cache(DomainError),
    /// A batch worker did not complete.
    TaskFailed(String),
}

impl AssessmentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::ExoplanetNotFound(_) => ErrorCode::ExoplanetNotFound,
            AssessmentError::InvalidRecord(_) => ErrorCode::ValidationFailed,
            AssessmentError::Repository(_) => ErrorCode::RepositoryError,
            AssessmentError::Cache(_) => ErrorCode::CacheError,
            AssessmentError::TaskFailed(_) => ErrorCode::InternalError,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AssessmentError::ExoplanetNotFound(_))
    }
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssessmentError::ExoplanetNotFound(id) => write!(f, "Exoplanet not found: {}", id),
            AssessmentError::InvalidRecord(err) => write!(f, "Invalid exoplanet record: {}", err),
            AssessmentError::Repository(err) => write!(f, "Repository error: {}", err),
            AssessmentError::Cache(err) => write!(f, "Cache error: {}", err),
            AssessmentError::TaskFailed(msg) => write!(f, "Assessment task failed: {}", msg),
        }
    }
}

impl std::error::Error for AssessmentError {}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        AssessmentError::Repository(err)
    }
}

impl From<ValidationError> for AssessmentError {
    fn from(err: ValidationError) -> Self {
        AssessmentError::InvalidRecord(err)
    }
}

impl From<AssessmentError> for DomainError {
    fn from(err: AssessmentError) -> Self {
        let code = err.code();
        let message = err.to_string();
        match err {
            AssessmentError::ExoplanetNotFound(id) => {
                DomainError::new(code, message).with_detail("exoplanet_id", id.to_string())
            }
            _ => DomainError::new(code, message),
        }
    }
}
