//! Process-local cache store.
//!
//! Used by tests and by local runs without a Redis server. Expired entries
//! are dropped on access and swept on every write.

use crate::metrics;
use crate::redis_store::ttl_seconds;
use crate::CacheStore;
use async_trait::async_trait;
use quill_core::QuillResult;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::debug;

const BACKEND: &str = "memory";

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        now < self.expires_at
    }
}

/// In-memory cache store with per-entry expiry.
///
/// TTLs are rounded the same way as the Redis store, so expiry behaves
/// identically in tests.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCacheStore {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl InMemoryCacheStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|entry| entry.is_live(now))
            .count()
    }

    /// Whether the store holds no live entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Remaining lifetime of `key`, if it is live.
    pub async fn ttl(&self, key: &str) -> Option<Duration> {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.expires_at - now)
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get_raw(&self, key: &str) -> QuillResult<Option<String>> {
        let now = Instant::now();
        let mut entries = self.entries.write().await;

        let value = match entries.get(key) {
            Some(entry) if entry.is_live(now) => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        };

        debug!(key, hit = value.is_some(), "In-memory cache lookup");
        metrics::record_lookup(BACKEND, value.is_some());
        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> QuillResult<()> {
        let now = Instant::now();
        let expires_at = now + Duration::from_secs(ttl_seconds(ttl));

        let mut entries = self.entries.write().await;
        entries.retain(|_, entry| entry.is_live(now));
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        metrics::record_write(BACKEND);
        Ok(())
    }

    async fn delete(&self, key: &str) -> QuillResult<bool> {
        let now = Instant::now();
        let removed = self.entries.write().await.remove(key);
        metrics::record_delete(BACKEND);
        Ok(removed.is_some_and(|entry| entry.is_live(now)))
    }

    async fn exists(&self, key: &str) -> QuillResult<bool> {
        Ok(self.ttl(key).await.is_some())
    }

    async fn ping(&self) -> QuillResult<()> {
        Ok(())
    }
}
