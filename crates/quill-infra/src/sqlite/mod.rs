//! SQLite persistence via sqlx.

pub mod pool;
pub mod post;
pub mod user;
