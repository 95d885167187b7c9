//! Mapping store implementations.
//!
//! Both backends implement [`crate::domain::repositories::MappingRepository`]
//! with the same contract and are interchangeable:
//!
//! - [`PgMappingRepository`] - PostgreSQL, durable, shareable across replicas
//! - [`InMemoryMappingRepository`] - process-local, for development and tests

pub mod memory_mapping_repository;
pub mod pg_mapping_repository;

pub use memory_mapping_repository::InMemoryMappingRepository;
pub use pg_mapping_repository::PgMappingRepository;
