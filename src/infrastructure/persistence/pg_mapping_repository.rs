//! PostgreSQL implementation of the mapping repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{InsertOutcome, MappingRepository};
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_code;

/// PostgreSQL repository for URL mappings.
///
/// Code uniqueness is enforced by the `urls_short_code_key` constraint, so a
/// conflicting insert fails atomically inside the database regardless of how
/// many service instances share the pool's database.
pub struct PgMappingRepository {
    pool: Arc<PgPool>,
}

impl PgMappingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MappingRepository for PgMappingRepository {
    async fn insert(
        &self,
        original_url: &str,
        short_code: &str,
    ) -> Result<InsertOutcome, AppError> {
        let result = sqlx::query_as::<_, UrlMapping>(
            r#"
            INSERT INTO urls (original_url, short_code)
            VALUES ($1, $2)
            RETURNING id, original_url, short_code, created_at
            "#,
        )
        .bind(original_url)
        .bind(short_code)
        .fetch_one(self.pool.as_ref())
        .await;

        match result {
            Ok(mapping) => Ok(InsertOutcome::Inserted(mapping)),
            Err(e) if is_unique_violation_on_code(&e) => {
                debug!(code = short_code, "Insert rejected by unique constraint");
                Ok(InsertOutcome::Collision)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, original_url, short_code, created_at
            FROM urls
            WHERE original_url = $1
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        let mapping = sqlx::query_as::<_, UrlMapping>(
            r#"
            SELECT id, original_url, short_code, created_at
            FROM urls
            WHERE short_code = $1
            "#,
        )
        .bind(short_code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(mapping)
    }

    async fn count(&self) -> Result<u64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count.max(0) as u64)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
