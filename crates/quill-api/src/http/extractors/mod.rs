//! Custom axum extractors.

pub mod json;

pub use json::Json;
