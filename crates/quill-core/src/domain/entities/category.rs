//! Article category record.

use crate::CategoryId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An article category. Categories form a shallow tree through `parent_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Display order; lower sorts first.
    pub sequence: i32,
    pub parent_id: Option<CategoryId>,
    pub created_at: DateTime<Utc>,
}

impl Category {
    #[must_use]
    pub fn new(id: CategoryId, name: impl Into<String>, sequence: i32) -> Self {
        Self {
            id,
            name: name.into(),
            sequence,
            parent_id: None,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub fn with_parent(mut self, parent_id: CategoryId) -> Self {
        self.parent_id = Some(parent_id);
        self
    }
}
