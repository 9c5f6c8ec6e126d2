//! Plain-text error responses for browser form posts.

use axum::response::{IntoResponse, Response};

use crate::error::AppError;

/// [`AppError`] rendered as `text/plain` with the same status code.
///
/// Form handlers return this instead of the JSON body used by the API.
#[derive(Debug)]
pub struct WebError(pub AppError);

impl From<AppError> for WebError {
    fn from(e: AppError) -> Self {
        Self(e)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.0.status_code();

        if status.is_server_error() {
            tracing::error!(error = ?self.0, "Web request failed");
        }

        (status, self.0.to_string()).into_response()
    }
}
