//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, LinkService};
use crate::infrastructure::persistence::SqliteLinkRepository;

/// State shared across handlers and middleware.
///
/// Cloning is cheap: services are reference-counted.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<SqliteLinkRepository>>,
    pub auth_service: Arc<AuthService>,
    /// Public site URL prefixed to short codes in responses and pages.
    pub site_url: String,
    /// Whether session cookies carry the `Secure` attribute.
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(
        link_service: Arc<LinkService<SqliteLinkRepository>>,
        auth_service: Arc<AuthService>,
        site_url: impl Into<String>,
        secure_cookies: bool,
    ) -> Self {
        Self {
            link_service,
            auth_service,
            site_url: site_url.into(),
            secure_cookies,
        }
    }
}
