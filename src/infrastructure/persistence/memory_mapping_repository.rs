//! In-memory implementation of the mapping repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{InsertOutcome, MappingRepository};
use crate::error::AppError;

/// Process-local mapping store backed by two `DashMap` indices.
///
/// The code index is authoritative: an insert claims its code through a
/// vacant-entry check under the shard lock, so concurrent inserts of the same
/// code cannot both succeed. The URL index is updated afterwards and keeps the
/// mapping with the lowest id for each URL.
///
/// Contents are lost when the process exits.
#[derive(Debug)]
pub struct InMemoryMappingRepository {
    by_code: DashMap<String, UrlMapping>,
    by_url: DashMap<String, UrlMapping>,
    next_id: AtomicI64,
}

impl InMemoryMappingRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            by_code: DashMap::new(),
            by_url: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryMappingRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MappingRepository for InMemoryMappingRepository {
    async fn insert(
        &self,
        original_url: &str,
        short_code: &str,
    ) -> Result<InsertOutcome, AppError> {
        let mapping = match self.by_code.entry(short_code.to_owned()) {
            Entry::Occupied(_) => return Ok(InsertOutcome::Collision),
            Entry::Vacant(slot) => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let mapping = UrlMapping::new(id, original_url, short_code, Utc::now());
                slot.insert(mapping.clone());
                mapping
            }
        };

        self.by_url
            .entry(original_url.to_owned())
            .and_modify(|current| {
                if mapping.id < current.id {
                    *current = mapping.clone();
                }
            })
            .or_insert_with(|| mapping.clone());

        Ok(InsertOutcome::Inserted(mapping))
    }

    async fn find_by_url(&self, original_url: &str) -> Result<Option<UrlMapping>, AppError> {
        Ok(self.by_url.get(original_url).map(|m| m.value().clone()))
    }

    async fn find_by_code(&self, short_code: &str) -> Result<Option<UrlMapping>, AppError> {
        Ok(self.by_code.get(short_code).map(|m| m.value().clone()))
    }

    async fn count(&self) -> Result<u64, AppError> {
        Ok(self.by_code.len() as u64)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn inserted(outcome: InsertOutcome) -> UrlMapping {
        match outcome {
            InsertOutcome::Inserted(mapping) => mapping,
            InsertOutcome::Collision => panic!("unexpected collision"),
        }
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryMappingRepository::new();

        let mapping = inserted(repo.insert("https://example.com", "abc123").await.unwrap());
        assert_eq!(mapping.id, 1);

        let by_code = repo.find_by_code("abc123").await.unwrap().unwrap();
        assert_eq!(by_code, mapping);

        let by_url = repo.find_by_url("https://example.com").await.unwrap().unwrap();
        assert_eq!(by_url, mapping);
    }

    #[tokio::test]
    async fn test_insert_duplicate_code_is_collision() {
        let repo = InMemoryMappingRepository::new();

        repo.insert("https://first.com", "taken1").await.unwrap();
        let outcome = repo.insert("https://second.com", "taken1").await.unwrap();

        assert_eq!(outcome, InsertOutcome::Collision);

        let owner = repo.find_by_code("taken1").await.unwrap().unwrap();
        assert_eq!(owner.original_url, "https://first.com");
        assert!(repo.find_by_url("https://second.com").await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_ids_increase_monotonically() {
        let repo = InMemoryMappingRepository::new();

        let a = inserted(repo.insert("https://a.com", "aaaaaa").await.unwrap());
        let b = inserted(repo.insert("https://b.com", "bbbbbb").await.unwrap());
        let c = inserted(repo.insert("https://c.com", "cccccc").await.unwrap());

        assert!(a.id < b.id && b.id < c.id);
    }

    #[tokio::test]
    async fn test_find_by_url_keeps_lowest_id() {
        let repo = InMemoryMappingRepository::new();

        let first = inserted(repo.insert("https://same.com", "first1").await.unwrap());
        repo.insert("https://same.com", "secnd2").await.unwrap();

        let found = repo.find_by_url("https://same.com").await.unwrap().unwrap();
        assert_eq!(found.short_code, first.short_code);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_find_by_url_is_byte_exact() {
        let repo = InMemoryMappingRepository::new();

        repo.insert("https://example.com/a", "abcdef").await.unwrap();

        assert!(repo.find_by_url("https://example.com/a/").await.unwrap().is_none());
        assert!(repo.find_by_url("https://EXAMPLE.com/a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_missing_code_returns_none() {
        let repo = InMemoryMappingRepository::new();
        assert!(repo.find_by_code("ZZZZZZ").await.unwrap().is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_inserts_of_same_code_have_one_winner() {
        let repo = Arc::new(InMemoryMappingRepository::new());

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let repo = repo.clone();
                tokio::spawn(async move {
                    repo.insert(&format!("https://example.com/{i}"), "shared")
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut winners = 0;
        for handle in handles {
            if matches!(handle.await.unwrap(), InsertOutcome::Inserted(_)) {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
