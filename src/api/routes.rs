//! API route configuration.
//!
//! All API endpoints require the `X-API-KEY` header, checked by
//! [`crate::api::middleware::api_key`].

use crate::api::handlers::shorten_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// All API routes, protected by API key authentication.
///
/// # Endpoints
///
/// - `POST /shorten` - Create a short link
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/shorten", post(shorten_handler))
}
