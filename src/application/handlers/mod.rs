//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;

pub use assessment::{
    AssessBatchCommand, AssessBatchHandler, AssessBatchResult, AssessExoplanetCommand,
    AssessExoplanetHandler, AssessExoplanetResult, AssessmentError, EngineHandle,
    GetMethodologyHandler,
};
