//! Repository trait definitions for the domain layer.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Testing
//!
//! See integration tests in `tests/repository_mapping.rs` for the PostgreSQL backend.

pub mod mapping_repository;

pub use mapping_repository::{InsertOutcome, MappingRepository};

#[cfg(test)]
pub use mapping_repository::MockMappingRepository;
