//! Domain layer containing the habitability model and scoring logic.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, confidence, errors)
//! - `exoplanet` - Planet snapshot with orbital and physical parameters
//! - `star` - Host star snapshot, spectral classification, habitable zone
//! - `scoring` - Factor plug-ins, configuration and the scoring engine
//! - `assessment` - Assessment aggregate and its report form

pub mod assessment;
pub mod exoplanet;
pub mod foundation;
pub mod scoring;
pub mod star;
