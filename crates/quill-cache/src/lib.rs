//! # Quill Cache
//!
//! Cache access layer for Quill.
//!
//! Formats namespaced keys from templates, serializes domain records to
//! JSON, and issues get/set/delete calls against a [`CacheStore`] with
//! fixed or configured expirations. Store failures are propagated as
//! [`quill_core::QuillError::Cache`]; nothing here retries.

pub mod cache_keys;
mod cache_service;
mod cache_store;
mod memory_store;
pub mod metrics;
mod pool;
mod redis_store;

pub use cache_keys::CacheKeys;
pub use cache_service::{
    CacheService, CATEGORIES_TTL, PUBLISH_ARTICLE_TTL, SIGNUP_CODE_TTL, USER_TTL,
};
pub use cache_store::{CacheExt, CacheStore};
pub use memory_store::InMemoryCacheStore;
pub use pool::{build_store, create_pool};
pub use redis_store::{ttl_seconds, RedisCacheStore};
