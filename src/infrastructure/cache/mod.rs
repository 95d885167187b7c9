//! Read-through cache for short code resolution.
//!
//! Mappings are immutable, so cached entries never go stale; the TTL only
//! bounds memory use.
//!
//! - [`RedisCache`] - Redis-backed cache
//! - [`NullCache`] - No-op implementation when caching is disabled

mod null_cache;
mod redis_cache;
mod service;

pub use null_cache::NullCache;
pub use redis_cache::RedisCache;
pub use service::{CacheError, CacheResult, CacheService};
