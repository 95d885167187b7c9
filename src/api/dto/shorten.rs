//! DTOs for link shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Maximum accepted URL length in bytes.
pub const MAX_URL_LENGTH: usize = 2048;

/// Request to shorten a single URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (absolute, `http` or `https`).
    ///
    /// Stored exactly as submitted; no normalization is applied.
    #[validate(length(min = 1, message = "URL must not be empty"))]
    #[validate(url(message = "Invalid URL format"))]
    #[validate(custom(function = "validate_http_url"))]
    pub url: String,
}

/// Response for a shortened URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
}

/// Accepts only absolute `http`/`https` URLs with a host.
///
/// The URL parser silently strips tabs and newlines, so the raw string is
/// checked as well: it must be at most [`MAX_URL_LENGTH`] bytes, contain no
/// control characters and carry no surrounding whitespace. Whatever passes
/// here is valid as a `Location` header value.
fn validate_http_url(value: &str) -> Result<(), ValidationError> {
    if value.len() > MAX_URL_LENGTH {
        return Err(ValidationError::new("length")
            .with_message(format!("URL must be at most {MAX_URL_LENGTH} bytes").into()));
    }

    if value.chars().any(char::is_control) {
        return Err(ValidationError::new("control_characters")
            .with_message("URL must not contain control characters".into()));
    }

    if value.trim() != value {
        return Err(ValidationError::new("whitespace")
            .with_message("URL must not start or end with whitespace".into()));
    }

    let parsed = url::Url::parse(value).map_err(|_| {
        ValidationError::new("url").with_message("Invalid URL format".into())
    })?;

    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ValidationError::new("scheme")
            .with_message("URL scheme must be http or https".into()));
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(ValidationError::new("host").with_message("URL must have a host".into()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(url: &str) -> ShortenRequest {
        ShortenRequest {
            url: url.to_string(),
        }
    }

    #[test]
    fn test_accepts_http_and_https() {
        assert!(request("https://example.com/a").validate().is_ok());
        assert!(request("http://example.com").validate().is_ok());
        assert!(request("https://example.com/path?q=1&b=2#frag").validate().is_ok());
    }

    #[test]
    fn test_rejects_relative_and_garbage() {
        assert!(request("not-a-url").validate().is_err());
        assert!(request("/relative/path").validate().is_err());
        assert!(request("").validate().is_err());
    }

    #[test]
    fn test_rejects_other_schemes() {
        assert!(request("ftp://example.com/file").validate().is_err());
        assert!(request("mailto:someone@example.com").validate().is_err());
        assert!(request("javascript:alert(1)").validate().is_err());
    }

    #[test]
    fn test_rejects_overlong_url() {
        let long = format!("https://example.com/{}", "a".repeat(MAX_URL_LENGTH));
        assert!(request(&long).validate().is_err());
    }

    #[test]
    fn test_length_limit_counts_bytes() {
        let prefix = "https://example.com/";
        let ascii = format!("{prefix}{}", "a".repeat(MAX_URL_LENGTH - prefix.len()));
        assert_eq!(ascii.len(), MAX_URL_LENGTH);
        assert!(request(&ascii).validate().is_ok());

        // 2048 characters, but three bytes each past the prefix.
        let wide = format!("{prefix}{}", "\u{20AC}".repeat(MAX_URL_LENGTH - prefix.len()));
        assert_eq!(wide.chars().count(), MAX_URL_LENGTH);
        assert!(request(&wide).validate().is_err());
    }

    #[test]
    fn test_rejects_control_characters() {
        for url in [
            "https://example.com/a\nb",
            "https://example.com/a\rb",
            "https://example.com/a\tb",
            "https://example.com/a\u{0}b",
            "https://example.com/a\u{7f}b",
        ] {
            assert!(request(url).validate().is_err(), "accepted {url:?}");
        }
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        assert!(request(" https://example.com/a").validate().is_err());
        assert!(request("https://example.com/a ").validate().is_err());
        assert!(request("https://example.com/a\n").validate().is_err());
    }

    #[test]
    fn test_accepts_non_ascii_path() {
        assert!(request("https://example.com/caf\u{e9}").validate().is_ok());
    }
}
