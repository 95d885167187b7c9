#![allow(dead_code)]

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::json;
use shortlink::application::services::ShortenerService;
use shortlink::domain::entities::UrlMapping;
use shortlink::domain::repositories::{InsertOutcome, MappingRepository};
use shortlink::error::AppError;
use shortlink::infrastructure::cache::{CacheResult, CacheService, NullCache};
use shortlink::infrastructure::persistence::{InMemoryMappingRepository, PgMappingRepository};
use shortlink::state::AppState;
use sqlx::PgPool;
use std::sync::Arc;

pub const BASE_URL: &str = "http://sho.rt";

/// State backed by a fresh in-memory store and no cache.
pub fn create_memory_state() -> (AppState, Arc<InMemoryMappingRepository>) {
    let repository = Arc::new(InMemoryMappingRepository::new());
    let state = state_with(repository.clone(), Arc::new(NullCache::new()));
    (state, repository)
}

/// State backed by PostgreSQL and no cache.
pub fn create_pg_state(pool: PgPool) -> AppState {
    let repository = Arc::new(PgMappingRepository::new(Arc::new(pool)));
    state_with(repository, Arc::new(NullCache::new()))
}

pub fn state_with(
    repository: Arc<dyn MappingRepository>,
    cache: Arc<dyn CacheService>,
) -> AppState {
    let shortener = ShortenerService::new(repository, BASE_URL);
    AppState::new(Arc::new(shortener), cache)
}

/// A store whose every operation fails as if the database were down.
pub struct UnavailableRepository;

#[async_trait]
impl MappingRepository for UnavailableRepository {
    async fn insert(&self, _url: &str, _code: &str) -> Result<InsertOutcome, AppError> {
        Err(down())
    }

    async fn find_by_url(&self, _url: &str) -> Result<Option<UrlMapping>, AppError> {
        Err(down())
    }

    async fn find_by_code(&self, _code: &str) -> Result<Option<UrlMapping>, AppError> {
        Err(down())
    }

    async fn count(&self) -> Result<u64, AppError> {
        Err(down())
    }

    async fn health_check(&self) -> bool {
        false
    }
}

fn down() -> AppError {
    AppError::unavailable("Mapping store unavailable", json!({ "reason": "test" }))
}

/// Cache that remembers everything it is given.
#[derive(Default)]
pub struct RecordingCache {
    pub entries: DashMap<String, String>,
}

#[async_trait]
impl CacheService for RecordingCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        Ok(self.entries.get(short_code).map(|v| v.value().clone()))
    }

    async fn set_url(&self, short_code: &str, original_url: &str) -> CacheResult<()> {
        self.entries
            .insert(short_code.to_string(), original_url.to_string());
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "recording"
    }
}
