//! Value objects shared by the domain records.

mod role;
mod status;

pub use role::UserRole;
pub use status::{ArticleStatus, UserStatus};
