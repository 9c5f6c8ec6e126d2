//! Business logic services for the application layer.

pub mod auth_service;
pub mod link_service;

pub use auth_service::{AuthService, AuthSettings};
pub use link_service::LinkService;
