//! HTTP middleware for API authentication and observability.

pub mod api_key;
pub mod tracing;
