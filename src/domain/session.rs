//! Session claims and the codec capability used to sign them.
//!
//! The web layer stores an encoded [`SessionClaims`] in the `session_token`
//! cookie. How the claims are protected is up to the [`SessionCodec`]
//! implementation; see [`crate::infrastructure::session::HmacSessionCodec`].

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Marker stored in [`SessionClaims::token`] for logged-in admins.
pub const AUTHENTICATED: &str = "authenticated";

/// Identity asserted by a session cookie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    pub username: String,
    pub token: String,
    /// Expiry as a unix timestamp in seconds.
    pub expires_at: i64,
}

impl SessionClaims {
    /// Claims for an authenticated admin, valid for `ttl_seconds` from now.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::ExpiryOutOfRange`] if the expiry overflows.
    pub fn authenticated(
        username: impl Into<String>,
        ttl_seconds: i64,
    ) -> Result<Self, SessionError> {
        let expires_at = Utc::now()
            .timestamp()
            .checked_add(ttl_seconds)
            .ok_or(SessionError::ExpiryOutOfRange(ttl_seconds))?;

        Ok(Self {
            username: username.into(),
            token: AUTHENTICATED.to_string(),
            expires_at,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.token == AUTHENTICATED
    }

    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.expires_at
    }
}

/// Errors produced while encoding or decoding a session token.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("malformed session token")]
    Malformed,

    #[error("session token signature mismatch")]
    BadSignature,

    #[error("session payload error: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("failed to generate session key: {0}")]
    KeyGeneration(String),

    #[error("session lifetime of {0}s is out of range")]
    ExpiryOutOfRange(i64),
}

/// Turns claims into an opaque token and back.
///
/// `decode` must reject any token it did not produce itself.
pub trait SessionCodec: Send + Sync {
    fn encode(&self, claims: &SessionClaims) -> Result<String, SessionError>;

    fn decode(&self, token: &str) -> Result<SessionClaims, SessionError>;
}
