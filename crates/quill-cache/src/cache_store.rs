//! Cache store trait for abstracted caching operations.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use quill_core::QuillResult;
use std::time::Duration;

/// Key-value store holding string payloads with per-key expiration.
///
/// Implementations pass failures through as `QuillError::Cache` and never
/// retry. Values are raw strings so the trait stays dyn-compatible; typed
/// access lives in [`CacheExt`].
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Get a raw value from the cache.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get_raw(&self, key: &str) -> QuillResult<Option<String>>;

    /// Set a raw value in the cache with a TTL.
    ///
    /// TTLs under one second are rounded up to one second.
    async fn set_raw(&self, key: &str, value: &str, ttl: Duration) -> QuillResult<()>;

    /// Delete a value from the cache.
    ///
    /// Returns `true` if the key existed and was deleted.
    async fn delete(&self, key: &str) -> QuillResult<bool>;

    /// Check if a key exists in the cache.
    async fn exists(&self, key: &str) -> QuillResult<bool>;

    /// Round-trip to the store to check it is reachable.
    async fn ping(&self) -> QuillResult<()>;

    /// Check if caching is enabled.
    fn is_enabled(&self) -> bool;
}

/// Extension trait with typed methods for convenience.
///
/// Values are stored as JSON. An empty stored string reads as a miss.
#[async_trait]
pub trait CacheExt: CacheStore {
    /// Get a typed value from the cache.
    async fn get<T: serde::de::DeserializeOwned + Send>(&self, key: &str) -> QuillResult<Option<T>> {
        match self.get_raw(key).await? {
            Some(json) if !json.is_empty() => {
                let value: T = serde_json::from_str(&json)?;
                Ok(Some(value))
            }
            _ => Ok(None),
        }
    }

    /// Set a typed value in the cache.
    async fn set<T: serde::Serialize + Send + Sync + ?Sized>(
        &self,
        key: &str,
        value: &T,
        ttl: Duration,
    ) -> QuillResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_raw(key, &json, ttl).await
    }

    /// Get a value or compute and cache it if not present.
    ///
    /// A failed cache write after a successful `factory` call is logged and
    /// otherwise ignored; the computed value is still returned.
    async fn get_or_set<T, F, Fut>(
        &self,
        key: &str,
        ttl: Duration,
        factory: F,
    ) -> QuillResult<T>
    where
        T: serde::Serialize + serde::de::DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: std::future::Future<Output = QuillResult<T>> + Send,
    {
        if let Some(cached) = self.get::<T>(key).await? {
            return Ok(cached);
        }

        let value = factory().await?;

        if let Err(e) = self.set(key, &value, ttl).await {
            tracing::warn!(key, error = %e, "Failed to populate cache");
        }

        Ok(value)
    }
}

// Blanket implementation for all CacheStore implementations
impl<T: CacheStore + ?Sized> CacheExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_core::QuillError;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Payload {
        name: String,
        count: u32,
    }

    #[tokio::test]
    async fn test_get_decodes_json() {
        let mut store = MockCacheStore::new();
        store
            .expect_get_raw()
            .withf(|key| key == "k")
            .returning(|_| Ok(Some(r#"{"name":"a","count":2}"#.to_string())));

        let value: Option<Payload> = store.get("k").await.unwrap();
        assert_eq!(
            value,
            Some(Payload {
                name: "a".to_string(),
                count: 2
            })
        );
    }

    #[tokio::test]
    async fn test_get_empty_string_is_miss() {
        let mut store = MockCacheStore::new();
        store.expect_get_raw().returning(|_| Ok(Some(String::new())));

        let value: Option<Payload> = store.get("k").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_get_invalid_json_is_serialization_error() {
        let mut store = MockCacheStore::new();
        store
            .expect_get_raw()
            .returning(|_| Ok(Some("not json".to_string())));

        let err = store.get::<Payload>("k").await.unwrap_err();
        assert!(matches!(err, QuillError::Serialization(_)));
    }

    #[tokio::test]
    async fn test_set_encodes_json() {
        let mut store = MockCacheStore::new();
        store
            .expect_set_raw()
            .withf(|key, value, ttl| {
                key == "k"
                    && value == r#"{"name":"b","count":1}"#
                    && *ttl == Duration::from_secs(30)
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let payload = Payload {
            name: "b".to_string(),
            count: 1,
        };
        store.set("k", &payload, Duration::from_secs(30)).await.unwrap();
    }

    #[tokio::test]
    async fn test_get_or_set_hit_skips_factory() {
        let mut store = MockCacheStore::new();
        store
            .expect_get_raw()
            .returning(|_| Ok(Some("7".to_string())));
        store.expect_set_raw().never();

        let value: u32 = store
            .get_or_set("k", Duration::from_secs(5), || async {
                Err(QuillError::internal("factory must not run on a hit"))
            })
            .await
            .unwrap();
        assert_eq!(value, 7);
    }

    #[tokio::test]
    async fn test_get_or_set_write_failure_still_returns_value() {
        let mut store = MockCacheStore::new();
        store.expect_get_raw().returning(|_| Ok(None));
        store
            .expect_set_raw()
            .times(1)
            .returning(|_, _, _| Err(QuillError::cache("connection reset")));

        let value: u32 = store
            .get_or_set("k", Duration::from_secs(5), || async { Ok(11) })
            .await
            .unwrap();
        assert_eq!(value, 11);
    }

    #[tokio::test]
    async fn test_get_propagates_store_error() {
        let mut store = MockCacheStore::new();
        store
            .expect_get_raw()
            .returning(|_| Err(QuillError::cache("timed out")));

        let err = store.get::<u32>("k").await.unwrap_err();
        assert!(err.is_retriable());
    }
}
