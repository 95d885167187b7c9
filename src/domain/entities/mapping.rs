//! Mapping entity representing a shortened URL.

use chrono::{DateTime, Utc};

/// A persisted association between a short code and its original URL.
///
/// Mappings are created once by the store and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlMapping {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(
        id: i64,
        original_url: impl Into<String>,
        short_code: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url: original_url.into(),
            short_code: short_code.into(),
            created_at,
        }
    }
}
