//! Web-specific middleware.

pub mod session_auth;
