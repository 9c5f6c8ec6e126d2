//! Short code generation and validation utilities.
//!
//! Generated codes are drawn uniformly from a character set using an
//! injected random number generator, which keeps generation deterministic
//! under a seeded RNG in tests.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Default character set for generated codes: ASCII letters and digits.
pub const ALPHANUMERIC: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default length of generated codes.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Maximum length of a user-provided custom code.
pub const MAX_CUSTOM_CODE_LENGTH: usize = 64;

static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("valid custom code pattern"));

/// Codes that would shadow fixed routes of the service.
const RESERVED_CODES: &[&str] = &[
    "login",
    "logout",
    "shortlinks",
    "shorten",
    "api",
    "static",
    "health",
    "favicon.ico",
];

/// Generates a random short code of `length` characters taken from `charset`.
///
/// # Panics
///
/// Panics if `charset` is empty. Callers pass a constant set such as
/// [`ALPHANUMERIC`].
///
/// # Examples
///
/// ```ignore
/// let mut rng = StdRng::seed_from_u64(42);
/// let code = generate_code(6, ALPHANUMERIC, &mut rng);
/// assert_eq!(code.len(), 6);
/// ```
pub fn generate_code<R: Rng + ?Sized>(length: usize, charset: &[u8], rng: &mut R) -> String {
    assert!(!charset.is_empty(), "code charset must not be empty");

    (0..length)
        .map(|_| charset[rng.random_range(0..charset.len())] as char)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > MAX_CUSTOM_CODE_LENGTH {
        return Err(AppError::bad_request(
            "Custom code must be 1-64 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::bad_request(
            "Custom code can only contain letters, digits, hyphens and underscores",
            json!({ "short_code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This code is reserved",
            json!({ "short_code": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate_code(6, ALPHANUMERIC, &mut rng).len(), 6);
        assert_eq!(generate_code(12, ALPHANUMERIC, &mut rng).len(), 12);
        assert_eq!(generate_code(0, ALPHANUMERIC, &mut rng).len(), 0);
    }

    #[test]
    fn test_generate_code_uses_charset_only() {
        let mut rng = StdRng::seed_from_u64(2);

        for _ in 0..100 {
            let code = generate_code(DEFAULT_CODE_LENGTH, ALPHANUMERIC, &mut rng);
            assert!(code.bytes().all(|b| ALPHANUMERIC.contains(&b)));
        }

        let code = generate_code(20, b"ab", &mut rng);
        assert!(code.chars().all(|c| c == 'a' || c == 'b'));
    }

    #[test]
    fn test_generate_code_is_deterministic_for_seed() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);

        assert_eq!(
            generate_code(8, ALPHANUMERIC, &mut rng1),
            generate_code(8, ALPHANUMERIC, &mut rng2)
        );
    }

    #[test]
    fn test_generate_code_single_char_charset() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(generate_code(4, b"z", &mut rng), "zzzz");
    }

    #[test]
    #[should_panic(expected = "code charset must not be empty")]
    fn test_generate_code_empty_charset_panics() {
        let mut rng = StdRng::seed_from_u64(4);
        generate_code(6, b"", &mut rng);
    }

    #[test]
    fn test_generate_code_produces_distinct_codes() {
        let mut rng = rand::rng();
        let codes: HashSet<String> = (0..1000)
            .map(|_| generate_code(10, ALPHANUMERIC, &mut rng))
            .collect();

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_validate_accepts_common_codes() {
        assert!(validate_custom_code("a").is_ok());
        assert!(validate_custom_code("newshort").is_ok());
        assert!(validate_custom_code("My_Link-2024").is_ok());
        assert!(validate_custom_code(&"x".repeat(MAX_CUSTOM_CODE_LENGTH)).is_ok());
    }

    #[test]
    fn test_validate_empty_string() {
        let err = validate_custom_code("").unwrap_err();
        assert!(err.to_string().contains("1-64 characters"));
    }

    #[test]
    fn test_validate_too_long() {
        assert!(validate_custom_code(&"x".repeat(MAX_CUSTOM_CODE_LENGTH + 1)).is_err());
    }

    #[test]
    fn test_validate_rejects_special_characters() {
        assert!(validate_custom_code("my code").is_err());
        assert!(validate_custom_code("a/b").is_err());
        assert!(validate_custom_code("what?").is_err());
        assert!(validate_custom_code("ünï").is_err());
    }

    #[test]
    fn test_validate_all_reserved_codes() {
        for &reserved in RESERVED_CODES {
            assert!(
                validate_custom_code(reserved).is_err(),
                "Reserved code '{}' should be invalid",
                reserved
            );
        }
    }
}
