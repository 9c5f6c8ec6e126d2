//! Validation of long URLs submitted for shortening.

use url::Url;

/// Errors that make a URL unacceptable as a redirect target.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL must not contain whitespace or control characters")]
    IllegalCharacter,
}

/// Checks that `input` is an absolute `http` or `https` URL with a host.
///
/// Rejects relative references and schemes like `javascript:`, `data:` or `ftp:`.
/// Also rejects whitespace and control characters anywhere in the input, since
/// the input is stored verbatim.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(UrlValidationError::IllegalCharacter);
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_http_and_https() {
        assert!(validate_url("http://example.com").is_ok());
        assert!(validate_url("https://example.com/path?q=1#frag").is_ok());
        assert!(validate_url("http://localhost:8080/").is_ok());
    }

    #[test]
    fn test_rejects_relative_and_garbage() {
        assert!(matches!(
            validate_url("invalid-url"),
            Err(UrlValidationError::InvalidFormat(_))
        ));
        assert!(validate_url("/just/a/path").is_err());
        assert!(validate_url("").is_err());
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert_eq!(
            validate_url("ftp://example.com/file"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
        assert_eq!(
            validate_url("javascript:alert(1)"),
            Err(UrlValidationError::UnsupportedProtocol)
        );
        assert!(validate_url("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_rejects_whitespace_and_control_characters() {
        for input in [
            "https://example.com/a\nb",
            "https://example.com/a\tb",
            "https://exa\rmple.com",
            " https://example.com",
            "https://example.com/ ",
            "https://example.com/a\u{7f}b",
        ] {
            assert_eq!(
                validate_url(input),
                Err(UrlValidationError::IllegalCharacter),
                "{input:?}"
            );
        }
    }
}
