//! Authentication service for admin sessions and API keys.

use hmac::{Hmac, Mac};
use rand::Rng;
use serde_json::json;
use sha2::Sha256;
use std::sync::Arc;

use crate::domain::session::{SessionClaims, SessionCodec};
use crate::error::AppError;

type HmacSha256 = Hmac<Sha256>;

/// Credentials and session policy for [`AuthService`].
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub admin_username: String,
    pub admin_password: String,
    pub api_key: String,
    pub session_ttl_seconds: i64,
}

/// Gatekeeper for the admin UI and the JSON API.
///
/// Secrets are never compared directly: each configured value is stored as an
/// HMAC tag under a per-process random key, and candidates are checked with
/// [`Mac::verify_slice`], which runs in constant time.
pub struct AuthService {
    codec: Arc<dyn SessionCodec>,
    tag_key: [u8; 32],
    username_tag: Vec<u8>,
    password_tag: Vec<u8>,
    api_key_tag: Vec<u8>,
    session_ttl_seconds: i64,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `codec` - encodes and verifies session tokens
    /// - `settings` - admin credentials, API key and session lifetime
    pub fn new(codec: Arc<dyn SessionCodec>, settings: AuthSettings) -> Self {
        let mut tag_key = [0u8; 32];
        rand::rng().fill(&mut tag_key);

        let tag = |value: &str| compute_tag(&tag_key, value);

        Self {
            username_tag: tag(&settings.admin_username),
            password_tag: tag(&settings.admin_password),
            api_key_tag: tag(&settings.api_key),
            codec,
            tag_key,
            session_ttl_seconds: settings.session_ttl_seconds,
        }
    }

    /// Lifetime of issued sessions in seconds.
    pub fn session_ttl_seconds(&self) -> i64 {
        self.session_ttl_seconds
    }

    /// Checks admin credentials and issues a session token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the username or password does not match.
    ///
    /// Returns [`AppError::Internal`] if the token cannot be encoded.
    pub fn login(&self, username: &str, password: &str) -> Result<String, AppError> {
        let username_ok = self.matches(&self.username_tag, username);
        let password_ok = self.matches(&self.password_tag, password);

        if !(username_ok && password_ok) {
            metrics::counter!("login_failures_total").increment(1);
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Username or password mismatch" }),
            ));
        }

        SessionClaims::authenticated(username, self.session_ttl_seconds)
            .and_then(|claims| self.codec.encode(&claims))
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to create session token");
                AppError::internal("Failed to create session", json!({}))
            })
    }

    /// Validates a session token taken from the `session_token` cookie.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if:
    /// - Token cannot be decoded or its signature does not verify
    /// - Claims do not carry the authenticated marker
    /// - Session has expired
    pub fn validate_session(&self, token: &str) -> Result<SessionClaims, AppError> {
        let claims = self.codec.decode(token)?;

        if !claims.is_authenticated() {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Session is not authenticated" }),
            ));
        }

        if claims.is_expired() {
            return Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Session expired" }),
            ));
        }

        Ok(claims)
    }

    /// Checks the value of the `X-API-KEY` header.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the key is missing or wrong.
    pub fn authorize_api_key(&self, api_key: Option<&str>) -> Result<(), AppError> {
        match api_key {
            Some(key) if self.matches(&self.api_key_tag, key) => Ok(()),
            Some(_) => Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "Invalid API key" }),
            )),
            None => Err(AppError::unauthorized(
                "Unauthorized",
                json!({ "reason": "X-API-KEY header is missing" }),
            )),
        }
    }

    fn matches(&self, expected_tag: &[u8], candidate: &str) -> bool {
        let mut mac = new_mac(&self.tag_key);
        mac.update(candidate.as_bytes());
        mac.verify_slice(expected_tag).is_ok()
    }
}

fn new_mac(key: &[u8]) -> HmacSha256 {
    HmacSha256::new_from_slice(key).expect("HMAC accepts any key length")
}

fn compute_tag(key: &[u8], value: &str) -> Vec<u8> {
    let mut mac = new_mac(key);
    mac.update(value.as_bytes());
    mac.finalize().into_bytes().to_vec()
}
