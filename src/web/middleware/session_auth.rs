//! Cookie session middleware for the admin pages.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{Redirect, Response},
};

use crate::state::AppState;
use crate::web::cookie::{SESSION_COOKIE, read_cookie};

/// Admits requests carrying a valid `session_token` cookie.
///
/// Unlike the API middleware, which answers `401 Unauthorized`, this one
/// redirects to `/login` so a browser lands on the login form.
///
/// # Errors
///
/// Returns `Redirect` (303) to `/login` if:
/// - `session_token` cookie is missing
/// - Token signature does not verify
/// - Session has expired
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let Some(token) = read_cookie(req.headers(), SESSION_COOKIE) else {
        return Err(Redirect::to("/login"));
    };

    match st.auth_service.validate_session(token) {
        Ok(claims) => {
            tracing::debug!(username = %claims.username, "Session accepted");
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::debug!(reason = %e.to_error_info().details, "Session rejected");
            Err(Redirect::to("/login"))
        }
    }
}
