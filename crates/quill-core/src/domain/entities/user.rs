//! User record.

use super::super::value_objects::{UserRole, UserStatus};
use crate::UserId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user.
    pub id: UserId,

    /// Display name, unique across the site.
    pub username: String,

    /// Phone number used for signup and login.
    pub phone: String,

    /// Optional email address.
    pub email: Option<String>,

    /// Hashed password (never written to the cache).
    #[serde(skip_serializing, default)]
    pub password_hash: String,

    /// Profile picture URL.
    pub avatar_url: Option<String>,

    /// User's role.
    pub role: UserRole,

    /// User's status.
    pub status: UserStatus,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new, inactive user.
    #[must_use]
    pub fn new(id: UserId, username: impl Into<String>, phone: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            username: username.into(),
            phone: phone.into(),
            email: None,
            password_hash: String::new(),
            avatar_url: None,
            role: UserRole::Normal,
            status: UserStatus::Inactive,
            created_at: now,
            updated_at: now,
        }
    }

    /// Activates the user account.
    pub fn activate(&mut self) {
        self.status = UserStatus::Active;
        self.updated_at = Utc::now();
    }

    /// Checks if the user is active.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, UserStatus::Active)
    }
}
