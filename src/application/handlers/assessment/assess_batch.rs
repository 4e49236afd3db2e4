//! AssessBatchHandler - Scores many exoplanets concurrently.
//!
//! Every evaluation runs on the blocking pool against one shared engine
//! snapshot, so a registry change mid-batch cannot mix configurations.
//! Items fail independently and results keep the input order.

use std::sync::Arc;

use futures::future::join_all;
use tracing::{info, warn};

use super::engine_handle::EngineHandle;
use super::errors::AssessmentError;
use super::mappers::record_to_entities;
use crate::domain::assessment::AssessmentReport;
use crate::domain::foundation::ExoplanetId;
use crate::ports::ExoplanetReader;

#[derive(Debug, Clone)]
pub struct AssessBatchCommand {
    pub exoplanet_ids: Vec<ExoplanetId>,
}

#[derive(Debug)]
pub struct AssessBatchResult {
    /// One entry per requested id, in request order.
    pub items: Vec<Result<AssessmentReport, AssessmentError>>,
}

impl AssessBatchResult {
    pub fn succeeded(&self) -> usize {
        self.items.iter().filter(|item| item.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.items.len() - self.succeeded()
    }
}

pub struct AssessBatchHandler {
    reader: Arc<dyn ExoplanetReader>,
    engine: Arc<EngineHandle>,
}

impl AssessBatchHandler {
    pub fn new(reader: Arc<dyn ExoplanetReader>, engine: Arc<EngineHandle>) -> Self {
        Self { reader, engine }
    }

    pub async fn handle(&self, cmd: AssessBatchCommand) -> AssessBatchResult {
        let engine = self.engine.snapshot();
        let requested = cmd.exoplanet_ids.len();

        let tasks = cmd.exoplanet_ids.into_iter().map(|exoplanet_id| {
            let engine = Arc::clone(&engine);
            let reader = Arc::clone(&self.reader);
            async move {
                let record = reader
                    .get_by_id(&exoplanet_id)
                    .await?
                    .ok_or(AssessmentError::ExoplanetNotFound(exoplanet_id))?;
                let (exoplanet, star) = record_to_entities(&record)?;

                tokio::task::spawn_blocking(move || engine.evaluate(&exoplanet, &star).to_report())
                    .await
                    .map_err(|err| {
                        warn!(exoplanet_id = %exoplanet_id, error = %err, "Assessment task failed");
                        AssessmentError::TaskFailed(err.to_string())
                    })
            }
        });

        let items = join_all(tasks).await;
        let result = AssessBatchResult { items };

        info!(
            requested,
            succeeded = result.succeeded(),
            failed = result.failed(),
            "Batch assessment complete"
        );

        result
    }
}
