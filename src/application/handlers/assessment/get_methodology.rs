//! GetMethodologyHandler - Describes how scores are currently computed.

use std::sync::Arc;

use super::engine_handle::EngineHandle;
use crate::domain::scoring::Methodology;

pub struct GetMethodologyHandler {
    engine: Arc<EngineHandle>,
}

impl GetMethodologyHandler {
    pub fn new(engine: Arc<EngineHandle>) -> Self {
        Self { engine }
    }

    /// Reflects the live registry and configuration at call time.
    pub async fn handle(&self) -> Methodology {
        self.engine.snapshot().methodology()
    }
}
