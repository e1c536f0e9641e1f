//! Redis connection pool creation.

use crate::{CacheStore, RedisCacheStore};
use deadpool_redis::{Config, Pool, Runtime};
use quill_config::RedisConfig;
use quill_core::{QuillError, QuillResult};
use std::sync::Arc;
use tracing::{info, warn};

/// Create a Redis connection pool and verify it with `PING`.
pub async fn create_pool(config: &RedisConfig) -> QuillResult<Pool> {
    info!("Creating Redis connection pool for cache...");

    let cfg = Config::from_url(&config.url);

    let pool = cfg
        .builder()
        .map_err(|e| QuillError::Configuration(format!("Invalid Redis config: {}", e)))?
        .max_size(config.pool_size)
        .wait_timeout(Some(config.connect_timeout()))
        .create_timeout(Some(config.connect_timeout()))
        .runtime(Runtime::Tokio1)
        .build()
        .map_err(|e| QuillError::Configuration(format!("Failed to create pool: {}", e)))?;

    // Test connection
    let mut conn = pool
        .get()
        .await
        .map_err(|e| QuillError::Cache(format!("Failed to get Redis connection: {}", e)))?;
    let _: String = deadpool_redis::redis::cmd("PING")
        .query_async(&mut conn)
        .await
        .map_err(|e| QuillError::Cache(format!("Redis PING failed: {}", e)))?;

    info!(
        pool_size = config.pool_size,
        prefix = %config.prefix,
        "Redis connection pool created successfully"
    );

    Ok(pool)
}

/// Build the cache store described by `config`.
///
/// Returns a disabled store when Redis is turned off, so callers never have
/// to branch on it.
pub async fn build_store(config: &RedisConfig) -> QuillResult<Arc<dyn CacheStore>> {
    if !config.enabled {
        warn!("Redis is disabled; cache reads will always miss");
        return Ok(Arc::new(RedisCacheStore::disabled()));
    }

    let pool = create_pool(config).await?;
    Ok(Arc::new(RedisCacheStore::new(Arc::new(pool))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_build_store_disabled() {
        let config = RedisConfig {
            enabled: false,
            ..RedisConfig::default()
        };

        let store = build_store(&config).await.unwrap();
        assert!(!store.is_enabled());
    }

    #[tokio::test]
    async fn test_create_pool_rejects_bad_url() {
        let config = RedisConfig {
            url: "not-a-url".to_string(),
            ..RedisConfig::default()
        };

        let err = create_pool(&config).await.unwrap_err();
        assert!(matches!(err, QuillError::Configuration(_)));
    }
}
