//! HMAC-SHA256 signed session tokens.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256};

use crate::domain::session::{SessionClaims, SessionCodec, SessionError};

type HmacSha256 = Hmac<Sha256>;

/// Length of the signing key in bytes.
const KEY_LENGTH: usize = 32;

/// Signs session claims with HMAC-SHA256.
///
/// # Token Format
///
/// ```text
/// base64url(json(claims)) "." base64url(hmac_sha256(key, payload))
/// ```
///
/// The MAC covers the encoded payload, so any modified byte invalidates the
/// token. Claims are signed, not encrypted: the username is readable by the
/// cookie holder.
pub struct HmacSessionCodec {
    key: [u8; KEY_LENGTH],
}

impl HmacSessionCodec {
    /// Creates a codec with a fresh random key.
    ///
    /// Tokens issued by one process are rejected after a restart.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::KeyGeneration`] if the system RNG fails.
    pub fn generate() -> Result<Self, SessionError> {
        let mut key = [0u8; KEY_LENGTH];
        getrandom::fill(&mut key).map_err(|e| SessionError::KeyGeneration(e.to_string()))?;
        Ok(Self { key })
    }

    /// Creates a codec whose key is derived from a configured secret.
    ///
    /// Tokens stay valid across restarts as long as the secret is unchanged.
    pub fn from_secret(secret: &str) -> Self {
        let key: [u8; KEY_LENGTH] = Sha256::digest(secret.as_bytes()).into();
        Self { key }
    }

    fn mac(&self) -> HmacSha256 {
        HmacSha256::new_from_slice(&self.key).expect("HMAC accepts any key length")
    }
}

impl SessionCodec for HmacSessionCodec {
    fn encode(&self, claims: &SessionClaims) -> Result<String, SessionError> {
        let payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(claims)?);

        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        let signature = URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes());

        Ok(format!("{payload}.{signature}"))
    }

    fn decode(&self, token: &str) -> Result<SessionClaims, SessionError> {
        let (payload, signature) = token.split_once('.').ok_or(SessionError::Malformed)?;

        let signature = URL_SAFE_NO_PAD
            .decode(signature)
            .map_err(|_| SessionError::Malformed)?;

        let mut mac = self.mac();
        mac.update(payload.as_bytes());
        mac.verify_slice(&signature)
            .map_err(|_| SessionError::BadSignature)?;

        let json = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| SessionError::Malformed)?;

        Ok(serde_json::from_slice(&json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn claims() -> SessionClaims {
        SessionClaims::authenticated("admin", 3600).unwrap()
    }

    #[test]
    fn test_decode_returns_encoded_claims() {
        let codec = HmacSessionCodec::generate().unwrap();
        let token = codec.encode(&claims()).unwrap();

        let decoded = codec.decode(&token).unwrap();
        assert_eq!(decoded.username, "admin");
        assert!(decoded.is_authenticated());
    }

    #[test]
    fn test_token_has_two_url_safe_parts() {
        let codec = HmacSessionCodec::from_secret("secret");
        let token = codec.encode(&claims()).unwrap();

        let parts: Vec<&str> = token.split('.').collect();
        assert_eq!(parts.len(), 2);
        assert!(
            token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        );
    }

    #[test]
    fn test_tampered_payload_is_rejected() {
        let codec = HmacSessionCodec::from_secret("secret");
        let token = codec.encode(&claims()).unwrap();
        let (_, signature) = token.split_once('.').unwrap();

        let forged = SessionClaims::authenticated("mallory", 3600).unwrap();
        let forged_payload = URL_SAFE_NO_PAD.encode(serde_json::to_vec(&forged).unwrap());
        let forged_token = format!("{forged_payload}.{signature}");

        assert!(matches!(
            codec.decode(&forged_token),
            Err(SessionError::BadSignature)
        ));
    }

    #[test]
    fn test_token_from_other_key_is_rejected() {
        let codec_a = HmacSessionCodec::from_secret("secret-a");
        let codec_b = HmacSessionCodec::from_secret("secret-b");

        let token = codec_a.encode(&claims()).unwrap();
        assert!(matches!(
            codec_b.decode(&token),
            Err(SessionError::BadSignature)
        ));
    }

    #[test]
    fn test_same_secret_shares_tokens() {
        let codec_a = HmacSessionCodec::from_secret("shared");
        let codec_b = HmacSessionCodec::from_secret("shared");

        let token = codec_a.encode(&claims()).unwrap();
        assert!(codec_b.decode(&token).is_ok());
    }

    #[test]
    fn test_generated_keys_differ() {
        let codec_a = HmacSessionCodec::generate().unwrap();
        let codec_b = HmacSessionCodec::generate().unwrap();

        let token = codec_a.encode(&claims()).unwrap();
        assert!(codec_b.decode(&token).is_err());
    }

    #[test]
    fn test_malformed_tokens() {
        let codec = HmacSessionCodec::from_secret("secret");

        assert!(matches!(codec.decode(""), Err(SessionError::Malformed)));
        assert!(matches!(
            codec.decode("no-separator"),
            Err(SessionError::Malformed)
        ));
        assert!(matches!(
            codec.decode("payload.!!not-base64!!"),
            Err(SessionError::Malformed)
        ));
    }
}
