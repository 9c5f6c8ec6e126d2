//! Handler for the JSON shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{LinkResponse, ShortenApiRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/shorten` (requires `X-API-KEY`)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "short_code": "docs" }
/// ```
///
/// `short_code` may be omitted or empty to get a generated code.
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// {
///   "id": 1,
///   "short_code": "docs",
///   "long_link": "https://example.com",
///   "times_accessed": 0,
///   "short_url": "http://localhost/docs"
/// }
/// ```
///
/// # Errors
///
/// - 400 if the body cannot be parsed or the URL/code is invalid
/// - 409 if the custom code is taken
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenApiRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Cannot parse body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let link = state
        .link_service
        .create_link(&payload.url, payload.short_code)
        .await?;

    tracing::info!(short_code = %link.short_code, "Short link created via API");

    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from_link(link, &state.site_url)),
    ))
}
