//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ExoplanetReader` - Loads persisted exoplanet rows
//! - `ScoreCache` - Stores derived scores keyed by input content hash

mod exoplanet_reader;
mod score_cache;

pub use exoplanet_reader::{ExoplanetReader, ExoplanetRecord};
pub use score_cache::{score_cache_key, CachedScore, ScoreCache};
