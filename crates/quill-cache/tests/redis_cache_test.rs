//! Integration tests for the Redis-backed cache.
//!
//! These tests run against a real Redis server using testcontainers.
//! Requires Docker to be available on the system.

mod common;

use common::TestRedis;
use deadpool_redis::redis::AsyncCommands;
use quill_cache::{
    build_store, create_pool, CacheKeys, CacheService, CacheStore, RedisCacheStore,
    SIGNUP_CODE_TTL, USER_TTL,
};
use quill_config::ServerConfig;
use quill_core::{Article, Category, CategoryId, User, UserId};
use std::sync::Arc;
use std::time::Duration;

async fn service(redis: &TestRedis) -> CacheService {
    let store = build_store(redis.config()).await.expect("Failed to build store");
    CacheService::from_config(store, redis.config(), &ServerConfig::default())
}

#[tokio::test]
async fn test_ping() {
    let redis = TestRedis::new().await;
    let store = build_store(redis.config()).await.unwrap();

    assert!(store.is_enabled());
    store.ping().await.expect("PING failed");
}

#[tokio::test]
async fn test_user_round_trip_and_ttl() {
    let redis = TestRedis::new().await;
    let service = service(&redis).await;

    let user = User::new(UserId(21), "carol", "13700000000");
    service.set_user(&user).await.unwrap();

    let cached = service.get_user(UserId(21)).await.unwrap().expect("user not cached");
    assert_eq!(cached.username, "carol");
    assert_eq!(cached.phone, "13700000000");

    // Inspect the key directly to check the prefix and expiration.
    let pool = create_pool(redis.config()).await.unwrap();
    let mut conn = pool.get().await.unwrap();
    let ttl: i64 = conn.ttl("quill:it:user:21").await.unwrap();
    assert!(ttl > 0 && ttl <= i64::try_from(USER_TTL.as_secs()).unwrap());

    assert!(service.delete_user(UserId(21)).await.unwrap());
    assert!(service.get_user(UserId(21)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_signup_code_ttl() {
    let redis = TestRedis::new().await;
    let service = service(&redis).await;

    service.set_signup_code("13600000000", "5521").await.unwrap();
    assert_eq!(
        service.get_signup_code("13600000000").await.unwrap().as_deref(),
        Some("5521")
    );

    let pool = create_pool(redis.config()).await.unwrap();
    let mut conn = pool.get().await.unwrap();
    let ttl: i64 = conn.ttl("quill:it:signupcode:13600000000").await.unwrap();
    assert!(ttl > 0 && ttl <= i64::try_from(SIGNUP_CODE_TTL.as_secs()).unwrap());
}

#[tokio::test]
async fn test_token_expires() {
    let redis = TestRedis::new().await;
    let pool = create_pool(redis.config()).await.unwrap();
    let store: Arc<dyn CacheStore> = Arc::new(RedisCacheStore::new(Arc::new(pool)));
    let service = CacheService::new(store, CacheKeys::new("quill:it"), Duration::from_secs(1));

    service.set_user_token(UserId(2), "short-lived").await.unwrap();
    assert!(service.get_user_token(UserId(2)).await.unwrap().is_some());

    tokio::time::sleep(Duration::from_millis(2100)).await;
    assert!(service.get_user_token(UserId(2)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_categories_and_article() {
    let redis = TestRedis::new().await;
    let service = service(&redis).await;

    assert!(service.get_categories().await.unwrap().is_none());

    let categories = vec![
        Category::new(CategoryId(1), "Rust", 1),
        Category::new(CategoryId(2), "Databases", 2),
    ];
    service.set_categories(&categories).await.unwrap();
    assert_eq!(service.get_categories().await.unwrap(), Some(categories));

    let article = Article::draft(UserId(3), "Caching", "Notes on caching");
    service.set_publish_article(UserId(3), &article).await.unwrap();
    assert_eq!(
        service.get_publish_article(UserId(3)).await.unwrap(),
        Some(article)
    );
}

#[tokio::test]
async fn test_raw_cache_operations() {
    let redis = TestRedis::new().await;
    let service = service(&redis).await;

    service
        .set_cache("raw:key", "value", Duration::from_secs(60))
        .await
        .unwrap();
    assert!(service.store().exists("raw:key").await.unwrap());
    assert_eq!(service.get_cache("raw:key").await.unwrap().as_deref(), Some("value"));
    assert!(service.del_cache("raw:key").await.unwrap());
    assert!(!service.del_cache("raw:key").await.unwrap());
}

#[tokio::test]
async fn test_unreachable_server_is_cache_error() {
    let config = quill_config::RedisConfig {
        url: "redis://127.0.0.1:1".to_string(),
        connect_timeout_secs: 1,
        ..quill_config::RedisConfig::default()
    };

    let err = create_pool(&config).await.unwrap_err();
    assert_eq!(err.error_code(), "CACHE_ERROR");
}
