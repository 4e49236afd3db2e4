//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - Process-local reader and score cache

pub mod memory;

pub use memory::{InMemoryExoplanetReader, InMemoryScoreCache};
