//! Session cookie formatting and parsing.

use axum::http::{HeaderMap, header::COOKIE};
use chrono::{TimeDelta, Utc};

/// Name of the cookie carrying the signed session token.
pub const SESSION_COOKIE: &str = "session_token";

const HTTP_DATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// `Set-Cookie` value issuing a session that lives for `ttl_seconds`.
///
/// `Expires` is omitted when the expiry date is not representable; `Max-Age`
/// alone still bounds the cookie.
pub fn session_cookie(token: &str, ttl_seconds: i64, secure: bool) -> String {
    let mut cookie = format!(
        "{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={ttl_seconds}"
    );

    let expires = TimeDelta::try_seconds(ttl_seconds)
        .and_then(|ttl| Utc::now().checked_add_signed(ttl));
    if let Some(expires) = expires {
        cookie.push_str(&format!("; Expires={}", expires.format(HTTP_DATE)));
    }

    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that makes the browser drop the session.
pub fn clear_session_cookie(secure: bool) -> String {
    let mut cookie = format!(
        "{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Reads the value of cookie `name` from the request's `Cookie` headers.
///
/// Handles several cookies per header (`a=1; b=2`) and several headers.
pub fn read_cookie<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|cookies| cookies.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;
            (key == name).then_some(value)
        })
}
