//! Exoplanet habitability scoring.
//!
//! This crate scores how favourable an exoplanet is for life as a weighted
//! combination of thirteen stellar, planetary, orbital and derived
//! factors. Weights come from a YAML scoring configuration, and every
//! assessment carries per-factor explanations, data completeness and a
//! serializable report.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
