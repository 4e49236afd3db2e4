//! In-memory adapters for the reader and cache ports.

mod exoplanet_reader;
mod score_cache;

pub use exoplanet_reader::InMemoryExoplanetReader;
pub use score_cache::InMemoryScoreCache;
