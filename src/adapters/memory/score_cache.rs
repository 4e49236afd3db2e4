//! In-memory score cache with a time-to-live and a size bound.
//!
//! Expired entries count as misses and are evicted when touched. When the
//! cache is full, expired entries are purged first and then the oldest
//! remaining entry makes room.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::config::CacheConfig;
use crate::domain::foundation::{DomainError, Timestamp};
use crate::ports::{CachedScore, ScoreCache};

#[derive(Debug, Clone)]
struct CacheEntry {
    score: CachedScore,
    inserted_at: Timestamp,
    expires_at: Timestamp,
}

impl CacheEntry {
    fn is_expired(&self, now: &Timestamp) -> bool {
        !now.is_before(&self.expires_at)
    }
}

#[derive(Debug)]
pub struct InMemoryScoreCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl_secs: u64,
    max_entries: usize,
}

impl InMemoryScoreCache {
    pub fn new(ttl_secs: u64, max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl_secs,
            max_entries: max_entries.max(1),
        }
    }

    pub fn from_config(config: &CacheConfig) -> Self {
        Self::new(config.ttl_secs, config.max_entries)
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    async fn get_at(&self, key: &str, now: Timestamp) -> Option<CachedScore> {
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some(entry) if entry.is_expired(&now) => {
                entries.remove(key);
                None
            }
            Some(entry) => Some(entry.score.clone()),
            None => None,
        }
    }

    async fn put_at(&self, key: String, score: CachedScore, now: Timestamp) {
        let mut entries = self.entries.write().await;
        if !entries.contains_key(&key) && entries.len() >= self.max_entries {
            entries.retain(|_, entry| !entry.is_expired(&now));
            if entries.len() >= self.max_entries {
                let oldest = entries
                    .iter()
                    .min_by_key(|(_, entry)| entry.inserted_at)
                    .map(|(k, _)| k.clone());
                if let Some(oldest) = oldest {
                    entries.remove(&oldest);
                }
            }
        }
        entries.insert(
            key,
            CacheEntry {
                score,
                inserted_at: now,
                expires_at: now.plus_secs(self.ttl_secs),
            },
        );
    }
}

#[async_trait]
impl ScoreCache for InMemoryScoreCache {
    async fn get(&self, key: &str) -> Result<Option<CachedScore>, DomainError> {
        Ok(self.get_at(key, Timestamp::now()).await)
    }

    async fn put(&self, key: String, score: CachedScore) -> Result<(), DomainError> {
        self.put_at(key, score, Timestamp::now()).await;
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> Result<bool, DomainError> {
        Ok(self.entries.write().await.remove(key).is_some())
    }

    async fn clear(&self) -> Result<(), DomainError> {
        self.entries.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::ScoreCategory;

    fn score(total: f64) -> CachedScore {
        CachedScore {
            exoplanet_id: None,
            total_score: total,
            score_category: ScoreCategory::from_score(total),
            data_completeness: 1.0,
            scoring_version: "2.0.0".to_string(),
            cached_at: Timestamp::from_unix_secs(1_700_000_000),
        }
    }

    #[tokio::test]
    async fn put_then_get() {
        let cache = InMemoryScoreCache::new(60, 10);
        cache.put("k".to_string(), score(0.7)).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), Some(score(0.7)));
        assert!(cache.get("other").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn expired_entries_miss_and_are_evicted() {
        let cache = InMemoryScoreCache::new(60, 10);
        let start = Timestamp::from_unix_secs(1_000);
        cache.put_at("k".to_string(), score(0.7), start).await;

        assert!(cache.get_at("k", start.plus_secs(59)).await.is_some());
        assert!(cache.get_at("k", start.plus_secs(60)).await.is_none());
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn oldest_entry_is_evicted_when_full() {
        let cache = InMemoryScoreCache::new(3_600, 2);
        let start = Timestamp::from_unix_secs(1_000);
        cache.put_at("a".to_string(), score(0.1), start).await;
        cache.put_at("b".to_string(), score(0.2), start.plus_secs(1)).await;
        cache.put_at("c".to_string(), score(0.3), start.plus_secs(2)).await;

        let now = start.plus_secs(3);
        assert_eq!(cache.len().await, 2);
        assert!(cache.get_at("a", now).await.is_none());
        assert!(cache.get_at("b", now).await.is_some());
        assert!(cache.get_at("c", now).await.is_some());
    }

    #[tokio::test]
    async fn expired_entries_are_purged_before_evicting_live_ones() {
        let cache = InMemoryScoreCache::new(10, 2);
        let start = Timestamp::from_unix_secs(1_000);
        cache.put_at("stale".to_string(), score(0.1), start).await;
        cache.put_at("live".to_string(), score(0.2), start.plus_secs(8)).await;
        cache.put_at("new".to_string(), score(0.3), start.plus_secs(12)).await;

        let now = start.plus_secs(13);
        assert!(cache.get_at("live", now).await.is_some());
        assert!(cache.get_at("new", now).await.is_some());
    }

    #[tokio::test]
    async fn overwriting_a_key_does_not_evict() {
        let cache = InMemoryScoreCache::new(60, 1);
        cache.put("k".to_string(), score(0.1)).await.unwrap();
        cache.put("k".to_string(), score(0.9)).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap().map(|s| s.total_score), Some(0.9));
    }

    #[tokio::test]
    async fn invalidate_and_clear() {
        let cache = InMemoryScoreCache::new(60, 10);
        cache.put("a".to_string(), score(0.1)).await.unwrap();
        cache.put("b".to_string(), score(0.2)).await.unwrap();
        assert!(cache.invalidate("a").await.unwrap());
        assert!(!cache.invalidate("a").await.unwrap());
        cache.clear().await.unwrap();
        assert!(cache.is_empty().await);
    }
}
