//! AssessExoplanetHandler - Scores one stored exoplanet.
//!
//! Loads the record, maps it to entities, evaluates it on an engine
//! snapshot and records the derived score in the cache. Cache trouble is
//! logged and never fails the assessment.

use std::sync::Arc;

use tracing::{debug, warn};

use super::engine_handle::EngineHandle;
use super::errors::AssessmentError;
use super::mappers::record_to_entities;
use crate::domain::assessment::{AssessmentReport, HabitabilityAssessment};
use crate::domain::exoplanet::ExoplanetEntity;
use crate::domain::foundation::ExoplanetId;
use crate::domain::star::StarEntity;
use crate::ports::{score_cache_key, CachedScore, ExoplanetReader, ScoreCache};

/// Command to assess an exoplanet.
#[derive(Debug, Clone)]
pub struct AssessExoplanetCommand {
    pub exoplanet_id: ExoplanetId,
}

/// Result of a successful assessment.
#[derive(Debug, Clone)]
pub struct AssessExoplanetResult {
    pub assessment: HabitabilityAssessment,
    pub report: AssessmentReport,
    /// Whether a derived score for identical inputs was already cached.
    pub cached_score_hit: bool,
}

pub struct AssessExoplanetHandler {
    reader: Arc<dyn ExoplanetReader>,
    cache: Arc<dyn ScoreCache>,
    engine: Arc<EngineHandle>,
}

impl AssessExoplanetHandler {
    pub fn new(
        reader: Arc<dyn ExoplanetReader>,
        cache: Arc<dyn ScoreCache>,
        engine: Arc<EngineHandle>,
    ) -> Self {
        Self {
            reader,
            cache,
            engine,
        }
    }

    pub async fn handle(
        &self,
        cmd: AssessExoplanetCommand,
    ) -> Result<AssessExoplanetResult, AssessmentError> {
        let (exoplanet, star) = self.load(&cmd.exoplanet_id).await?;
        let engine = self.engine.snapshot();

        let key = match score_cache_key(&exoplanet, &star, &engine) {
            Ok(key) => Some(key),
            Err(err) => {
                warn!(exoplanet_id = %cmd.exoplanet_id, error = %err, "Score cache key unavailable");
                None
            }
        };

        let cached_score_hit = match &key {
            Some(key) => match self.cache.get(key).await {
                Ok(hit) => hit.is_some(),
                Err(err) => {
                    warn!(exoplanet_id = %cmd.exoplanet_id, error = %err, "Score cache read failed");
                    false
                }
            },
            None => false,
        };

        let assessment = engine.evaluate(&exoplanet, &star);

        if let (Some(key), false) = (key, cached_score_hit) {
            if let Err(err) = self.cache.put(key, CachedScore::from(&assessment)).await {
                warn!(exoplanet_id = %cmd.exoplanet_id, error = %err, "Score cache write failed");
            }
        }

        debug!(
            exoplanet_id = %cmd.exoplanet_id,
            score = assessment.total_score,
            cached_score_hit,
            "Exoplanet assessed"
        );

        Ok(AssessExoplanetResult {
            report: assessment.to_report(),
            assessment,
            cached_score_hit,
        })
    }

    /// The cached derived score for the exoplanet's current data and the
    /// active configuration, if any.
    pub async fn cached_score(
        &self,
        exoplanet_id: &ExoplanetId,
    ) -> Result<Option<CachedScore>, AssessmentError> {
        let (exoplanet, star) = self.load(exoplanet_id).await?;
        let engine = self.engine.snapshot();
        let key = score_cache_key(&exoplanet, &star, &engine).map_err(AssessmentError::Cache)?;
        self.cache.get(&key).await.map_err(AssessmentError::Cache)
    }

    async fn load(
        &self,
        exoplanet_id: &ExoplanetId,
    ) -> Result<(ExoplanetEntity, StarEntity), AssessmentError> {
        let record = self
            .reader
            .get_by_id(exoplanet_id)
            .await?
            .ok_or(AssessmentError::ExoplanetNotFound(*exoplanet_id))?;
        Ok(record_to_entities(&record)?)
    }
}
