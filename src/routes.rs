//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /{code}`       - Short link redirect (public)
//! - `GET  /health`       - Health check (public)
//! - `GET  /favicon.ico`  - Always 404
//! - `/api/*`             - JSON API (`X-API-KEY` required)
//! - `/login`, `/logout`  - Admin sign in / sign out
//! - `/shortlinks`, `/shorten`, `/{code}/delete` - Admin UI (session cookie required)
//! - `/static/*`          - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - API key (API) or cookie session (web)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{favicon_handler, health_handler, redirect_handler};
use crate::api::middleware::{api_key, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::session_auth;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the router with all routes and per-route middleware.
pub fn build_router(state: AppState) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), api_key::layer));

    let web_protected = web::routes::protected_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), session_auth::layer),
    );

    Router::new()
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .route("/favicon.ico", get(favicon_handler))
        .nest("/api", api_router)
        .merge(web_protected)
        .merge(web::routes::public_routes())
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service: [`build_router`] behind trailing-slash
/// normalization, so `/shortlinks/` and `/shortlinks` are the same route.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
