//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Redirect,
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The visit counter is incremented in the same statement that looks the
/// link up, so concurrent visits are never lost.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Redirect, AppError> {
    let long_url = state.link_service.resolve(&code).await?;

    tracing::debug!(short_code = %code, "Redirecting");

    Ok(Redirect::temporary(&long_url))
}

/// Browsers request `/favicon.ico`; answer it before the short-code route does.
pub async fn favicon_handler() -> StatusCode {
    StatusCode::NOT_FOUND
}
