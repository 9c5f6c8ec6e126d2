//! Login and logout handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::state::AppState;
use crate::web::cookie::{clear_session_cookie, session_cookie};

/// Template for the login page.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {}

/// Credentials posted by the login form.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /login`
pub async fn login_page_handler() -> impl IntoResponse {
    LoginTemplate {}
}

/// Checks the posted credentials and starts a session.
///
/// # Endpoint
///
/// `POST /login`
///
/// On success sets the `session_token` cookie and redirects (303) to
/// `/shortlinks`; on failure redirects back to `/login`.
pub async fn login_handler(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    match state.auth_service.login(&form.username, &form.password) {
        Ok(token) => {
            tracing::info!(username = %form.username, "Admin logged in");

            let cookie = session_cookie(
                &token,
                state.auth_service.session_ttl_seconds(),
                state.secure_cookies,
            );

            ([(SET_COOKIE, cookie)], Redirect::to("/shortlinks")).into_response()
        }
        Err(_) => {
            tracing::warn!(username = %form.username, "Failed login attempt");
            Redirect::to("/login").into_response()
        }
    }
}

/// Ends the session.
///
/// # Endpoint
///
/// `GET /logout`
pub async fn logout_handler(State(state): State<AppState>) -> Response {
    (
        [(SET_COOKIE, clear_session_cookie(state.secure_cookies))],
        Redirect::to("/login"),
    )
        .into_response()
}
