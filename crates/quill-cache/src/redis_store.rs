//! Redis-based cache store.

use crate::metrics;
use crate::CacheStore;
use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use quill_core::{QuillError, QuillResult};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

const BACKEND: &str = "redis";

/// Converts a TTL to whole seconds for `SET EX`, never less than one.
///
/// Redis rejects `EX 0`, so sub-second TTLs are rounded up.
#[must_use]
pub fn ttl_seconds(ttl: Duration) -> u64 {
    ttl.as_secs().max(1)
}

/// Redis-based cache store.
///
/// Built either over a connection pool or disabled. A disabled store misses
/// every read and silently drops every write.
#[derive(Clone)]
pub struct RedisCacheStore {
    /// Redis connection pool.
    pool: Option<Arc<Pool>>,
}

impl RedisCacheStore {
    /// Create a new Redis cache store.
    #[must_use]
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool: Some(pool) }
    }

    /// Create a no-op cache store (for when Redis is disabled).
    #[must_use]
    pub fn disabled() -> Self {
        Self { pool: None }
    }

    /// Get a connection from the pool for `operation`.
    async fn get_conn(&self, operation: &'static str) -> QuillResult<deadpool_redis::Connection> {
        match &self.pool {
            Some(pool) => pool.get().await.map_err(|e| {
                Self::fail(operation, format!("Failed to get Redis connection: {}", e))
            }),
            None => Err(QuillError::Cache("Cache is disabled".to_string())),
        }
    }

    fn fail(operation: &'static str, message: String) -> QuillError {
        metrics::record_error(BACKEND, operation);
        QuillError::Cache(message)
    }
}

#[async_trait]
impl CacheStore for RedisCacheStore {
    fn is_enabled(&self) -> bool {
        self.pool.is_some()
    }

    async fn get_raw(&self, key: &str) -> QuillResult<Option<String>> {
        if !self.is_enabled() {
            return Ok(None);
        }

        let mut conn = self.get_conn("get").await?;
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| Self::fail("get", format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }
        metrics::record_lookup(BACKEND, value.is_some());

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> QuillResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn("set").await?;
        let ttl_secs = ttl_seconds(ttl);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| Self::fail("set", format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        metrics::record_write(BACKEND);
        Ok(())
    }

    async fn delete(&self, key: &str) -> QuillResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn("delete").await?;
        let deleted: i64 = conn
            .del(key)
            .await
            .map_err(|e| Self::fail("delete", format!("Failed to delete key '{}': {}", key, e)))?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        metrics::record_delete(BACKEND);
        Ok(deleted > 0)
    }

    async fn exists(&self, key: &str) -> QuillResult<bool> {
        if !self.is_enabled() {
            return Ok(false);
        }

        let mut conn = self.get_conn("exists").await?;
        let exists: bool = conn
            .exists(key)
            .await
            .map_err(|e| Self::fail("exists", format!("Failed to check key '{}': {}", key, e)))?;

        Ok(exists)
    }

    async fn ping(&self) -> QuillResult<()> {
        if !self.is_enabled() {
            return Ok(());
        }

        let mut conn = self.get_conn("ping").await?;
        let pong: String = deadpool_redis::redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| Self::fail("ping", format!("Redis PING failed: {}", e)))?;

        debug!("Redis answered PING with '{}'", pong);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::names;
    use crate::metrics::test_support::counter_value;
    use crate::CacheExt;
    use metrics_util::debugging::DebuggingRecorder;

    #[test]
    fn test_ttl_seconds() {
        assert_eq!(ttl_seconds(Duration::from_secs(3600)), 3600);
        assert_eq!(ttl_seconds(Duration::from_millis(1500)), 1);
        assert_eq!(ttl_seconds(Duration::from_millis(300)), 1);
        assert_eq!(ttl_seconds(Duration::ZERO), 1);
    }

    #[tokio::test]
    async fn test_unreachable_server_counts_errors() {
        let pool = deadpool_redis::Config::from_url("redis://127.0.0.1:1")
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .unwrap();
        let cache = RedisCacheStore::new(Arc::new(pool));

        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();
        let _guard = ::metrics::set_default_local_recorder(&recorder);

        let err = cache.get_raw("k").await.unwrap_err();
        assert_eq!(err.error_code(), "CACHE_ERROR");
        let err = cache.set_raw("k", "v", Duration::from_secs(1)).await.unwrap_err();
        assert!(err.is_retriable());

        let snapshot = snapshotter.snapshot().into_vec();
        for operation in ["get", "set"] {
            let labels = [("backend", "redis"), ("operation", operation)];
            assert_eq!(
                counter_value(&snapshot, names::CACHE_ERRORS_TOTAL, &labels),
                Some(1),
                "{operation}"
            );
        }
        assert_eq!(
            counter_value(&snapshot, names::CACHE_MISSES_TOTAL, &[("backend", "redis")]),
            None
        );
    }

    #[test]
    fn test_disabled_cache() {
        let cache = RedisCacheStore::disabled();
        assert!(!cache.is_enabled());
    }

    #[tokio::test]
    async fn test_disabled_cache_misses_and_drops_writes() {
        let cache = RedisCacheStore::disabled();

        cache.set_raw("k", "v", Duration::from_secs(10)).await.unwrap();
        assert_eq!(cache.get_raw("k").await.unwrap(), None);
        assert_eq!(cache.get::<u32>("k").await.unwrap(), None);
        assert!(!cache.exists("k").await.unwrap());
        assert!(!cache.delete("k").await.unwrap());
        cache.ping().await.unwrap();
    }
}
