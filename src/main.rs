//! exohab-score
//!
//! Scores a batch of exoplanet records and prints the assessment reports.
//!
//! # Usage
//!
//! ```bash
//! exohab-score records.json
//! cat records.json | exohab-score
//! ```
//!
//! The input is a JSON array of exoplanet records. The output is a JSON
//! array of assessment reports in input order.
//!
//! # Environment Variables
//!
//! - `EXOHAB__SCORING__CONFIG_PATH`: Scoring YAML file
//! - `EXOHABITABILITY_SCORING_CONFIG`: Scoring YAML file, if the above is unset
//! - `EXOHAB__LOGGING__LEVEL`: Log filter (default: info,exo_habitability=debug)
//! - `EXOHAB__LOGGING__JSON`: Emit JSON log lines
//! - `RUST_LOG`: Overrides the log filter

use std::io::Read;
use std::sync::Arc;

use tracing::info;

use exo_habitability::adapters::memory::{InMemoryExoplanetReader, InMemoryScoreCache};
use exo_habitability::application::{AssessExoplanetCommand, AssessExoplanetHandler, EngineHandle};
use exo_habitability::config::AppConfig;
use exo_habitability::domain::scoring::ScoringEngine;
use exo_habitability::ports::ExoplanetRecord;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;
    config.logging.init_tracing()?;

    let scoring = config.scoring.load_scoring_config()?;
    let engine = Arc::new(EngineHandle::new(ScoringEngine::with_default_factors(scoring)));

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let records: Vec<ExoplanetRecord> = serde_json::from_str(&input)?;
    let ids: Vec<_> = records.iter().map(|record| record.id).collect();
    info!(records = records.len(), "Loaded exoplanet records");

    let handler = AssessExoplanetHandler::new(
        Arc::new(InMemoryExoplanetReader::with_records(records)),
        Arc::new(InMemoryScoreCache::from_config(&config.cache)),
        engine,
    );

    let mut reports = Vec::with_capacity(ids.len());
    for exoplanet_id in ids {
        let result = handler.handle(AssessExoplanetCommand { exoplanet_id }).await?;
        reports.push(result.report);
    }

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
