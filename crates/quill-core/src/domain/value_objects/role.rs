//! User role value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role stored on a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Regular reader/author.
    #[default]
    Normal,
    /// Can review articles.
    Editor,
    /// Administrator with full access.
    Admin,
    /// Super administrator (site owner).
    SuperAdmin,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Editor => write!(f, "editor"),
            Self::Admin => write!(f, "admin"),
            Self::SuperAdmin => write!(f, "super_admin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_serde_matches_display() {
        for role in [UserRole::Normal, UserRole::Editor, UserRole::Admin, UserRole::SuperAdmin] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role));
        }
    }
}
