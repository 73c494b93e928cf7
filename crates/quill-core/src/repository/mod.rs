//! Repository trait definitions (ports).
//!
//! These traits define the storage interface that the infrastructure
//! layer (quill-infra) implements. The core crate never depends on any
//! specific storage technology.

pub mod post;
pub mod user;
