//! Infrastructure implementations for Quill.
//!
//! SQLite-backed repositories behind the trait definitions in quill-core.

pub mod sqlite;
