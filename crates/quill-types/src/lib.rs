//! Shared domain types for Quill.
//!
//! Pure data: entities, request DTOs, and error enums. No I/O and no
//! framework dependencies, so every other crate can depend on this one.

pub mod error;
pub mod post;
pub mod user;
