//! Long URL validation.
//!
//! Submitted URLs are stored verbatim; we only check that they parse as
//! absolute HTTP(S) URLs and reject dangerous schemes.

use url::Url;

/// Errors that can occur while validating a submitted long URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlCheckError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must have a host")]
    MissingHost,

    #[error("URL must not contain control characters")]
    ControlCharacters,
}

/// Checks that `input` is a syntactically valid absolute http(s) URL.
///
/// Rejects schemes like `javascript:`, `data:`, and `file:` that would
/// turn a redirect into an attack vector.
///
/// # Errors
///
/// Returns [`UrlCheckError::InvalidFormat`] for malformed input and
/// [`UrlCheckError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn validate_long_url(input: &str) -> Result<(), UrlCheckError> {
    // The parser silently strips tabs and newlines, but the URL is
    // stored verbatim and later emitted as a Location header, which
    // cannot carry control characters.
    if input.chars().any(|c| c.is_ascii_control()) {
        return Err(UrlCheckError::ControlCharacters);
    }

    let url = Url::parse(input).map_err(|e| UrlCheckError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlCheckError::UnsupportedProtocol),
    }

    if url.host_str().is_none() {
        return Err(UrlCheckError::MissingHost);
    }

    Ok(())
}
