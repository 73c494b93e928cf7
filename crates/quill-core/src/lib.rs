//! Business logic for Quill.
//!
//! Repository traits define the storage interface (ports); services
//! orchestrate the rules on top of them. This crate never depends on a
//! concrete storage technology -- implementations live in quill-infra.

pub mod repository;
pub mod service;
