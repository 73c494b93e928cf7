//! HTTP API: router, handlers, and application state.
//!
//! Exposed as a library so the black-box API tests can build the same
//! router the `quill` binary serves.

pub mod http;
pub mod state;
