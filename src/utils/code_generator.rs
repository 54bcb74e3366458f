//! Short code generation and validation.
//!
//! Codes are 7 characters over the base62 alphabet. The first candidate
//! for a URL is derived deterministically from its content, so
//! re-submitting the same long URL tends to produce the same code; on
//! collision the caller falls back to [`random_code`].

use crate::error::AppError;
use crate::utils::base62;
use rand::Rng;
use serde_json::json;
use sha2::{Digest, Sha256};

/// Length of every generated short code.
pub const CODE_LENGTH: usize = 7;

/// Number of leading hex digits of the digest used for the candidate.
/// 15 hex digits is 60 bits, which covers the 62^7 keyspace.
const HASH_PREFIX_LEN: usize = 15;

/// Derives the deterministic candidate code for a long URL.
///
/// The URL is hashed with SHA-256, the first 15 hex digits of the digest
/// are read as an integer, base62-encoded, and cut to exactly
/// [`CODE_LENGTH`] characters. Encodings shorter than 7 characters are
/// left-padded with `'0'`, the alphabet's zero digit, so the output
/// width is fixed.
pub fn candidate_code(long_url: &str) -> String {
    let digest = hex::encode(Sha256::digest(long_url.as_bytes()));
    // 15 hex digits always fit in a u64, so the parse cannot fail.
    let n = u64::from_str_radix(&digest[..HASH_PREFIX_LEN], 16).expect("15 hex digits fit in u64");

    let mut code = base62::encode(n);
    code.truncate(CODE_LENGTH);

    if code.len() < CODE_LENGTH {
        let mut padded = "0".repeat(CODE_LENGTH - code.len());
        padded.push_str(&code);
        code = padded;
    }

    code
}

/// Generates a random 7-character base62 code.
///
/// Each position is sampled uniformly from the alphabet. Used as the
/// fallback when the deterministic candidate is already taken.
pub fn random_code() -> String {
    let mut rng = rand::rng();

    (0..CODE_LENGTH)
        .map(|_| base62::ALPHABET[rng.random_range(0..base62::ALPHABET.len())] as char)
        .collect()
}

/// Validates a user-provided custom short code.
///
/// Custom codes may be 1-30 characters and must be purely alphanumeric,
/// matching the storage column and the alphabet generated codes draw
/// from.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the length or character rules are
/// violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if code.is_empty() || code.len() > 30 {
        return Err(AppError::bad_request(
            "Custom short code must be 1-30 characters",
            json!({ "provided_length": code.len() }),
        ));
    }

    if !base62::is_base62(code) {
        return Err(AppError::bad_request(
            "Custom short code can only contain letters and digits",
            json!({ "code": code }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn assert_valid_code(code: &str) {
        assert_eq!(code.len(), CODE_LENGTH, "wrong length: {code:?}");
        assert!(base62::is_base62(code), "bad alphabet: {code:?}");
    }

    #[test]
    fn test_candidate_is_deterministic() {
        let a = candidate_code("https://example.com");
        let b = candidate_code("https://example.com");
        assert_eq!(a, b);
        assert_valid_code(&a);
    }

    #[test]
    fn test_candidate_differs_per_url() {
        let a = candidate_code("https://example.com/one");
        let b = candidate_code("https://example.com/two");
        assert_ne!(a, b);
    }

    #[test]
    fn test_candidate_length_and_alphabet_over_inputs() {
        for i in 0..200 {
            let code = candidate_code(&format!("https://example.com/page/{i}"));
            assert_valid_code(&code);
        }
    }

    #[test]
    fn test_random_code_shape() {
        for _ in 0..200 {
            assert_valid_code(&random_code());
        }
    }

    #[test]
    fn test_random_codes_are_spread_out() {
        let codes: HashSet<String> = (0..1000).map(|_| random_code()).collect();
        // 62^7 keyspace; a duplicate in 1000 draws would be a broken RNG.
        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_validate_custom_code_accepts_alphanumeric() {
        assert!(validate_custom_code("a").is_ok());
        assert!(validate_custom_code("abc1234").is_ok());
        assert!(validate_custom_code("MyCode2024").is_ok());
        assert!(validate_custom_code(&"x".repeat(30)).is_ok());
    }

    #[test]
    fn test_validate_custom_code_rejects_bad_length() {
        assert!(validate_custom_code("").is_err());
        assert!(validate_custom_code(&"x".repeat(31)).is_err());
    }

    #[test]
    fn test_validate_custom_code_rejects_bad_characters() {
        assert!(validate_custom_code("my-code").is_err());
        assert!(validate_custom_code("my_code").is_err());
        assert!(validate_custom_code("my code").is_err());
        assert!(validate_custom_code("mycode!").is_err());
    }
}
