//! Assessment handlers.
//!
//! Load persisted exoplanets, score them on a snapshot of the shared
//! engine and expose the active methodology.

mod assess_batch;
mod assess_exoplanet;
mod engine_handle;
mod errors;
mod get_methodology;
mod mappers;

pub use assess_batch::{AssessBatchCommand, AssessBatchHandler, AssessBatchResult};
pub use assess_exoplanet::{AssessExoplanetCommand, AssessExoplanetHandler, AssessExoplanetResult};
pub use engine_handle::EngineHandle;
pub use errors::AssessmentError;
pub use get_methodology::GetMethodologyHandler;
pub use mappers::record_to_entities;
