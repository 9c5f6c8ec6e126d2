//! API key authentication middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::AppError, state::AppState};

/// Header carrying the shared API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Authenticates API requests using the `X-API-KEY` header.
///
/// # Header Format
///
/// ```text
/// X-API-KEY: <key>
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing, not valid UTF-8, or
/// does not match the configured key.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let api_key = req
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    if let Err(e) = st.auth_service.authorize_api_key(api_key) {
        tracing::warn!(path = %req.uri().path(), "Rejected API request");
        return Err(e);
    }

    Ok(next.run(req).await)
}
