//! REST API layer for HTTP request/response handling.
//!
//! This layer validates input, translates requests into allocator operations
//! and formats responses.
//!
//! # Modules
//!
//! - [`dto`] - Request/response serialization and validation
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Tracing and CORS layers

pub mod dto;
pub mod handlers;
pub mod middleware;
