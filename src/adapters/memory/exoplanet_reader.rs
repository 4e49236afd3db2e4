//! In-memory exoplanet reader.
//!
//! Backs the `ExoplanetReader` port with a map keyed by id. Used by the
//! command-line binary, which seeds it from a JSON file, and by tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ExoplanetId};
use crate::ports::{ExoplanetReader, ExoplanetRecord};

#[derive(Debug, Clone, Default)]
pub struct InMemoryExoplanetReader {
    records: Arc<RwLock<HashMap<ExoplanetId, ExoplanetRecord>>>,
}

impl InMemoryExoplanetReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the reader. A later record with the same id wins.
    pub fn with_records(records: impl IntoIterator<Item = ExoplanetRecord>) -> Self {
        let map = records.into_iter().map(|r| (r.id, r)).collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn insert(&self, record: ExoplanetRecord) {
        self.records.write().await.insert(record.id, record);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl ExoplanetReader for InMemoryExoplanetReader {
    async fn get_by_id(&self, id: &ExoplanetId) -> Result<Option<ExoplanetRecord>, DomainError> {
        Ok(self.records.read().await.get(id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<ExoplanetRecord>, DomainError> {
        let wanted = name.trim();
        Ok(self
            .records
            .read()
            .await
            .values()
            .find(|r| r.name.eq_ignore_ascii_case(wanted))
            .cloned())
    }
}
