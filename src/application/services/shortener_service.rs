//! Short code allocation and resolution service.

use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{InsertOutcome, MappingRepository};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;
use serde_json::json;
use tracing::{debug, error, warn};

/// Default number of candidate codes tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 5;

/// Service for allocating short codes and resolving them back to URLs.
///
/// # Metrics
///
/// Emitted through the [`metrics`] facade, so they are only collected when
/// the embedding binary installs a recorder:
///
/// - `shortener_mappings_created_total`
/// - `shortener_collisions_total`
/// - `shortener_generation_failures_total`
///
/// Holds no mutable state of its own: uniqueness of codes is enforced by the
/// repository's atomic insert, so the service can be shared freely across
/// tasks, processes and replicas pointing at the same store.
pub struct ShortenerService<R: MappingRepository + ?Sized> {
    repository: Arc<R>,
    base_url: String,
    max_attempts: usize,
}

impl<R: MappingRepository + ?Sized> ShortenerService<R> {
    /// Creates a new shortener service.
    ///
    /// `base_url` is the public prefix used to build short URLs.
    pub fn new(repository: Arc<R>, base_url: impl Into<String>) -> Self {
        Self {
            repository,
            base_url: base_url.into(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Overrides the collision retry ceiling (minimum 1).
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &Arc<R> {
        &self.repository
    }

    /// Shortens a URL, returning the mapping that owns it.
    ///
    /// # Deduplication
    ///
    /// URLs are compared byte-for-byte. If a mapping for exactly this string
    /// already exists it is returned unchanged, so repeated calls with the same
    /// input yield the same code. `https://example.com` and
    /// `https://example.com/` are different URLs.
    ///
    /// # Code Generation
    ///
    /// A random 6-character alphanumeric candidate is inserted under the
    /// store's uniqueness constraint. On collision a fresh candidate is drawn,
    /// up to the configured number of attempts.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::GenerationFailed`] if every attempt collided.
    /// Storage failures are propagated unchanged and never retried.
    pub async fn shorten(&self, original_url: &str) -> Result<UrlMapping, AppError> {
        if let Some(existing) = self.repository.find_by_url(original_url).await? {
            debug!(code = %existing.short_code, "URL already shortened");
            return Ok(existing);
        }

        for attempt in 1..=self.max_attempts {
            let candidate = generate_code();

            match self.repository.insert(original_url, &candidate).await? {
                InsertOutcome::Inserted(mapping) => {
                    metrics::counter!("shortener_mappings_created_total").increment(1);
                    debug!(code = %mapping.short_code, attempt, "Created mapping");
                    return Ok(mapping);
                }
                InsertOutcome::Collision => {
                    metrics::counter!("shortener_collisions_total").increment(1);
                    warn!(
                        code = %candidate,
                        attempt,
                        max_attempts = self.max_attempts,
                        "Short code collision, retrying"
                    );
                }
            }
        }

        metrics::counter!("shortener_generation_failures_total").increment(1);
        error!(
            attempts = self.max_attempts,
            "Failed to allocate a unique short code"
        );

        Err(AppError::generation_failed(
            "Failed to generate unique short code",
            json!({ "reason": "Too many collisions", "attempts": self.max_attempts }),
        ))
    }

    /// Resolves a short code to its mapping.
    ///
    /// The code is treated as opaque: malformed input simply does not match.
    /// Returns `Ok(None)` when no mapping owns the code.
    pub async fn resolve(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        self.repository.find_by_code(short_code).await
    }

    /// Builds the public short URL for a code: `base_url + "/" + code`.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), short_code)
    }
}
