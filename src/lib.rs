//! # URL Shortener
//!
//! A small URL shortening service built with Axum and SQLite: a JSON API for
//! creating links, a redirect endpoint that counts visits, and a
//! session-protected admin UI.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Link entity, repository trait, session claims and codec trait
//! - **Application Layer** ([`application`]) - Link and authentication services
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite repository, HMAC session codec
//! - **API Layer** ([`api`]) - JSON API, redirect and health handlers
//! - **Web Layer** ([`web`]) - Askama admin pages
//!
//! ## Quick Start
//!
//! ```bash
//! export API_KEY="change-me"
//! export ADMIN_PASSWORD="change-me-too"
//! cargo run
//!
//! curl -X POST localhost:3001/api/shorten \
//!   -H 'X-API-KEY: change-me' -H 'Content-Type: application/json' \
//!   -d '{"url": "https://example.com", "short_code": "ex"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, AuthSettings, LinkService};
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::domain::repositories::LinkRepository;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
