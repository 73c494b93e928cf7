//! Request handlers, one module per resource.

pub mod feed;
pub mod post;
pub mod user;
