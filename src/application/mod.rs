//! Application layer services implementing business logic.
//!
//! Services consume repository and codec traits and provide a clean API for
//! HTTP handlers and the admin CLI.
//!
//! - [`services::link_service::LinkService`] - Link creation, resolution, visit counting
//! - [`services::auth_service::AuthService`] - Admin sessions and API key checks

pub mod services;
