//! Status value objects.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// Registered but not yet activated.
    #[default]
    Inactive,
    /// User account is active.
    Active,
    /// User account is frozen by an administrator.
    Frozen,
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inactive => write!(f, "inactive"),
            Self::Active => write!(f, "active"),
            Self::Frozen => write!(f, "frozen"),
        }
    }
}

/// Article review status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ArticleStatus {
    /// Saved but not submitted.
    #[default]
    Draft,
    /// Waiting for editor review.
    Verifying,
    /// Review passed, visible to readers.
    Published,
    /// Review rejected.
    VerifyFail,
}

impl fmt::Display for ArticleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Draft => write!(f, "draft"),
            Self::Verifying => write!(f, "verifying"),
            Self::Published => write!(f, "published"),
            Self::VerifyFail => write!(f, "verify_fail"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serde_matches_display() {
        for status in [UserStatus::Inactive, UserStatus::Active, UserStatus::Frozen] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
        for status in [
            ArticleStatus::Draft,
            ArticleStatus::Verifying,
            ArticleStatus::Published,
            ArticleStatus::VerifyFail,
        ] {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }
}
