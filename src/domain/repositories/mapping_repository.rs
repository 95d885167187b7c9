//! Repository trait for URL mapping persistence.

use crate::domain::entities::UrlMapping;
use crate::error::AppError;
use async_trait::async_trait;

/// Result of an attempted insert.
///
/// A collision is an expected outcome rather than an error: the caller picked
/// a short code that another mapping already owns and should try a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(UrlMapping),
    Collision,
}

/// Durable, indexed storage of URL mappings.
///
/// Implementations must make [`insert`](Self::insert) atomic with respect to
/// the uniqueness of `short_code`: two concurrent callers inserting the same
/// code must never both see [`InsertOutcome::Inserted`], and a mapping must
/// become visible to readers with all of its fields at once.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgMappingRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryMappingRepository`] - in-process, non-durable
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MappingRepository: Send + Sync {
    /// Atomically inserts a mapping unless `short_code` is already taken.
    ///
    /// The store assigns `id` and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] or [`AppError::Internal`] on storage
    /// failures. A taken code is reported as `Ok(InsertOutcome::Collision)`.
    async fn insert(&self, original_url: &str, short_code: &str)
    -> Result<InsertOutcome, AppError>;

    /// Finds the mapping for an exact (byte-for-byte) URL.
    ///
    /// If more than one mapping shares the URL, the one with the lowest `id`
    /// is returned.
    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Finds the mapping that owns `short_code`.
    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError>;

    /// Counts stored mappings.
    async fn count(&self) -> Result<u64, AppError>;

    /// Returns `true` if the backend is reachable.
    async fn health_check(&self) -> bool;
}
