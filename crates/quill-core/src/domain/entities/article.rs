//! Article record.

use super::Category;
use crate::{ArticleId, ArticleStatus, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Unique identifier; `None` until the article is stored.
    pub id: Option<ArticleId>,

    pub title: String,

    #[serde(default)]
    pub summary: String,

    /// Markdown body.
    pub content: String,

    /// Author.
    pub user_id: UserId,

    #[serde(default)]
    pub categories: Vec<Category>,

    #[serde(default)]
    pub status: ArticleStatus,

    #[serde(default)]
    pub browse_count: u64,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Article {
    /// Creates an unsaved draft.
    #[must_use]
    pub fn draft(user_id: UserId, title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            title: title.into(),
            summary: String::new(),
            content: content.into(),
            user_id,
            categories: Vec::new(),
            status: ArticleStatus::Draft,
            browse_count: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Submits the article for review.
    pub fn submit(&mut self) {
        self.status = ArticleStatus::Verifying;
        self.updated_at = Utc::now();
    }
}
