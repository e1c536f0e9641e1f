//! Typed cache operations for the application's records.

use crate::{CacheExt, CacheKeys, CacheStore};
use quill_config::{RedisConfig, ServerConfig};
use quill_core::{Article, Category, QuillResult, User, UserId};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// TTL for cached user records (1 hour).
pub const USER_TTL: Duration = Duration::from_secs(60 * 60);

/// TTL for signup verification codes (10 minutes).
pub const SIGNUP_CODE_TTL: Duration = Duration::from_secs(10 * 60);

/// TTL for an article awaiting publication (1 hour).
pub const PUBLISH_ARTICLE_TTL: Duration = Duration::from_secs(60 * 60);

/// TTL for the category list (1 hour).
pub const CATEGORIES_TTL: Duration = Duration::from_secs(60 * 60);

/// Cache access for users, signup codes, login tokens, pending articles and
/// categories.
///
/// Each operation formats its key from [`CacheKeys`], encodes the payload,
/// and issues a single store call. Store errors are returned unchanged.
#[derive(Clone)]
pub struct CacheService {
    store: Arc<dyn CacheStore>,
    keys: CacheKeys,
    token_ttl: Duration,
}

impl CacheService {
    /// Create a cache service over `store`.
    ///
    /// `token_ttl` is the lifetime of cached login tokens.
    #[must_use]
    pub fn new(store: Arc<dyn CacheStore>, keys: CacheKeys, token_ttl: Duration) -> Self {
        Self {
            store,
            keys,
            token_ttl,
        }
    }

    /// Create a cache service using the configured key prefix and token lifetime.
    #[must_use]
    pub fn from_config(
        store: Arc<dyn CacheStore>,
        redis: &RedisConfig,
        server: &ServerConfig,
    ) -> Self {
        Self::new(
            store,
            CacheKeys::new(redis.prefix.clone()),
            server.token_max_age(),
        )
    }

    /// The key builder in use.
    #[must_use]
    pub fn keys(&self) -> &CacheKeys {
        &self.keys
    }

    /// The underlying store.
    #[must_use]
    pub fn store(&self) -> &Arc<dyn CacheStore> {
        &self.store
    }

    /// Lifetime applied to cached login tokens.
    #[must_use]
    pub const fn token_ttl(&self) -> Duration {
        self.token_ttl
    }

    // ============ Users ============

    /// Cached user record for `id`.
    pub async fn get_user(&self, id: UserId) -> QuillResult<Option<User>> {
        self.store.get(&self.keys.user(id)).await
    }

    /// Cache `user` under its own id for [`USER_TTL`].
    pub async fn set_user(&self, user: &User) -> QuillResult<()> {
        self.store.set(&self.keys.user(user.id), user, USER_TTL).await
    }

    /// Drop the cached user record; true if one existed.
    pub async fn delete_user(&self, id: UserId) -> QuillResult<bool> {
        self.store.delete(&self.keys.user(id)).await
    }

    // ============ Signup codes ============

    /// Cache the verification code sent to `phone` for [`SIGNUP_CODE_TTL`].
    pub async fn set_signup_code(&self, phone: &str, code: &str) -> QuillResult<()> {
        debug!(phone, "Caching signup code");
        self.store
            .set_raw(&self.keys.signup_code(phone), code, SIGNUP_CODE_TTL)
            .await
    }

    /// Pending verification code for `phone`.
    pub async fn get_signup_code(&self, phone: &str) -> QuillResult<Option<String>> {
        self.store.get_raw(&self.keys.signup_code(phone)).await
    }

    /// Drop the verification code for `phone`; true if one existed.
    pub async fn delete_signup_code(&self, phone: &str) -> QuillResult<bool> {
        self.store.delete(&self.keys.signup_code(phone)).await
    }

    // ============ Login tokens ============

    /// Cache the login token for `id` for the configured token lifetime.
    pub async fn set_user_token(&self, id: UserId, token: &str) -> QuillResult<()> {
        self.store
            .set_raw(&self.keys.user_token(id), token, self.token_ttl)
            .await
    }

    /// Current login token for `id`.
    pub async fn get_user_token(&self, id: UserId) -> QuillResult<Option<String>> {
        self.store.get_raw(&self.keys.user_token(id)).await
    }

    /// Drop the login token for `id`; true if one existed.
    pub async fn delete_user_token(&self, id: UserId) -> QuillResult<bool> {
        self.store.delete(&self.keys.user_token(id)).await
    }

    // ============ Articles awaiting publication ============

    /// Cache the article `user_id` is about to publish for [`PUBLISH_ARTICLE_TTL`].
    pub async fn set_publish_article(&self, user_id: UserId, article: &Article) -> QuillResult<()> {
        self.store
            .set(&self.keys.publish_article(user_id), article, PUBLISH_ARTICLE_TTL)
            .await
    }

    /// Article `user_id` is about to publish.
    pub async fn get_publish_article(&self, user_id: UserId) -> QuillResult<Option<Article>> {
        self.store.get(&self.keys.publish_article(user_id)).await
    }

    /// Drop the pending article for `user_id`; true if one existed.
    pub async fn delete_publish_article(&self, user_id: UserId) -> QuillResult<bool> {
        self.store.delete(&self.keys.publish_article(user_id)).await
    }

    // ============ Categories ============

    /// Cached category list.
    pub async fn get_categories(&self) -> QuillResult<Option<Vec<Category>>> {
        self.store.get(&self.keys.categories()).await
    }

    /// Cache the category list for [`CATEGORIES_TTL`].
    pub async fn set_categories(&self, categories: &[Category]) -> QuillResult<()> {
        self.store
            .set(&self.keys.categories(), categories, CATEGORIES_TTL)
            .await
    }

    /// Drop the cached category list; true if it existed.
    pub async fn delete_categories(&self) -> QuillResult<bool> {
        self.store.delete(&self.keys.categories()).await
    }

    // ============ Arbitrary keys ============
    //
    // These take the key verbatim; no prefix is applied.

    /// Write `value` under `key` for `ttl`.
    pub async fn set_cache(&self, key: &str, value: &str, ttl: Duration) -> QuillResult<()> {
        self.store.set_raw(key, value, ttl).await
    }

    /// Raw value stored under `key`.
    pub async fn get_cache(&self, key: &str) -> QuillResult<Option<String>> {
        self.store.get_raw(key).await
    }

    /// Delete `key`; true if it existed.
    pub async fn del_cache(&self, key: &str) -> QuillResult<bool> {
        self.store.delete(key).await
    }
}
