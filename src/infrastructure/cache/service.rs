//! Cache service trait and error types.

use async_trait::async_trait;
use thiserror::Error;

/// Errors raised while connecting to the cache backend.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Cache connection error: {0}")]
    Connection(String),
}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Cache of `short_code -> original_url` lookups.
///
/// Implementations are fail-open: a broken cache degrades to store lookups and
/// never fails a resolve request.
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Returns the cached URL for `short_code`, or `None` on miss.
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>>;

    /// Caches the URL for `short_code`.
    async fn set_url(&self, short_code: &str, original_url: &str) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;

    /// Short backend name for health reporting.
    fn backend(&self) -> &'static str;
}
