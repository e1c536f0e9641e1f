//! Domain records.

mod article;
mod category;
mod user;

pub use article::Article;
pub use category::Category;
pub use user::User;
