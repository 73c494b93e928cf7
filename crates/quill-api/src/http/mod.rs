//! HTTP/REST API layer for Quill.
//!
//! Axum-based JSON API with a centralized error responder and CORS support.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
