//! Observability setup for Quill binaries.

pub mod tracing_setup;
