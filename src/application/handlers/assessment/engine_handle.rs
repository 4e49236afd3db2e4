//! Shared, swappable access to the scoring engine.
//!
//! Evaluations work on an `Arc` snapshot taken up front and never hold the
//! lock while scoring. Registry and configuration changes build a new
//! engine and swap it in; evaluations already running keep the snapshot
//! they started with.

use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::scoring::ScoringEngine;

#[derive(Debug)]
pub struct EngineHandle {
    current: RwLock<Arc<ScoringEngine>>,
}

impl EngineHandle {
    pub fn new(engine: ScoringEngine) -> Self {
        Self {
            current: RwLock::new(Arc::new(engine)),
        }
    }

    /// The engine as of now.
    pub fn snapshot(&self) -> Arc<ScoringEngine> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Installs a new engine and returns the previous one.
    pub fn replace(&self, engine: ScoringEngine) -> Arc<ScoringEngine> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(engine))
    }

    /// Copy-on-write update. Concurrent updates are serialized.
    pub fn update<F>(&self, change: F)
    where
        F: FnOnce(&mut ScoringEngine),
    {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = ScoringEngine::clone(&guard);
        change(&mut next);
        *guard = Arc::new(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::{NormalizationMethod, ScoringConfig};

    #[test]
    fn snapshot_survives_update() {
        let handle = EngineHandle::new(ScoringEngine::default());
        let before = handle.snapshot();

        handle.update(|engine| {
            engine.unregister_factor("tidal_locking");
        });

        assert_eq!(before.registered_factors().len(), 13);
        assert_eq!(handle.snapshot().registered_factors().len(), 12);
    }

    #[test]
    fn replace_returns_previous_engine() {
        let handle = EngineHandle::new(ScoringEngine::default());
        let config = ScoringConfig::default().with_normalization_method(NormalizationMethod::Minimum);
        let previous = handle.replace(ScoringEngine::with_default_factors(config));

        assert_eq!(previous.config().normalization_method(), NormalizationMethod::WeightedAverage);
        assert_eq!(
            handle.snapshot().config().normalization_method(),
            NormalizationMethod::Minimum
        );
    }
}
