//! Admin UI route configuration.

use crate::state::AppState;
use crate::web::handlers::{
    delete_handler, login_handler, login_page_handler, logout_handler, shorten_form_handler,
    shortlinks_handler,
};
use axum::{
    Router,
    routing::{get, post},
};

/// Admin routes requiring a session.
///
/// Protected via [`crate::web::middleware::session_auth`].
///
/// # Endpoints
///
/// - `GET  /shortlinks`     - Link list and creation form
/// - `POST /shorten`        - Create a link from the form
/// - `POST /{code}/delete`  - Delete a link
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/shortlinks", get(shortlinks_handler))
        .route("/shorten", post(shorten_form_handler))
        .route("/{code}/delete", post(delete_handler))
}

/// Public routes without authentication.
///
/// # Endpoints
///
/// - `GET  /login`  - Login page
/// - `POST /login`  - Submit credentials
/// - `GET  /logout` - End the session
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page_handler).post(login_handler))
        .route("/logout", get(logout_handler))
}
