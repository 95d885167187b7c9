//! Backends behind the domain traits.
//!
//! - [`persistence`] - Mapping stores: PostgreSQL for durable deployments,
//!   an in-memory map for single-process runs and tests
//! - [`cache`] - Optional Redis read-through cache for redirects

pub mod cache;
pub mod persistence;
