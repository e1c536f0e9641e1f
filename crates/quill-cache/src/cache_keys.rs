//! Cache key templates.
//!
//! Every key is `<prefix>:<template>`, where the prefix namespaces one
//! deployment environment and the template embeds the record identifier.

use quill_core::UserId;

/// Template for a cached user record.
pub const USER: &str = "user";
/// Template for a pending signup verification code.
pub const SIGNUP_CODE: &str = "signupcode";
/// Template for a user's current login token.
pub const USER_TOKEN: &str = "usertoken";
/// Template for an article a user is about to publish.
pub const PUBLISH_ARTICLE: &str = "publisharticle";
/// Template for the full category list.
pub const CATEGORIES: &str = "categories";

/// Key builder bound to one namespace prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheKeys {
    prefix: String,
}

impl CacheKeys {
    /// Create a new key builder with the given prefix.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The namespace prepended to every key.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// `<prefix>:user:<id>`
    #[must_use]
    pub fn user(&self, id: UserId) -> String {
        format!("{}:{}:{}", self.prefix, USER, id)
    }

    /// `<prefix>:signupcode:<phone>`
    ///
    /// The phone number is used verbatim; callers normalize it first.
    #[must_use]
    pub fn signup_code(&self, phone: &str) -> String {
        format!("{}:{}:{}", self.prefix, SIGNUP_CODE, phone)
    }

    /// `<prefix>:usertoken:<id>`
    #[must_use]
    pub fn user_token(&self, id: UserId) -> String {
        format!("{}:{}:{}", self.prefix, USER_TOKEN, id)
    }

    /// `<prefix>:publisharticle:<user id>`
    #[must_use]
    pub fn publish_article(&self, user_id: UserId) -> String {
        format!("{}:{}:{}", self.prefix, PUBLISH_ARTICLE, user_id)
    }

    /// `<prefix>:categories`
    #[must_use]
    pub fn categories(&self) -> String {
        format!("{}:{}", self.prefix, CATEGORIES)
    }
}
