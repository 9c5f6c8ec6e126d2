//! Admin UI for browsers.
//!
//! Server-rendered Askama pages guarded by a signed session cookie.
//!
//! # Modules
//!
//! - [`handlers`] - Page and form handlers
//! - [`middleware`] - Session cookie check
//! - [`routes`] - Admin route configuration
//! - [`cookie`] - `Set-Cookie` formatting and `Cookie` parsing
//! - [`error`] - Plain-text error responses

pub mod cookie;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routes;
