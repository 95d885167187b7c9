//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info, warn};

const KEY_PREFIX: &str = "shortlink:code:";

/// Redis cache for resolved short codes.
///
/// Uses a `ConnectionManager` for automatic reconnection. Command failures are
/// logged and reported as misses.
pub struct RedisCache {
    conn: ConnectionManager,
    ttl_seconds: u64,
}

impl RedisCache {
    /// Connects to Redis and verifies the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, ttl_seconds: u64) -> CacheResult<Self> {
        let client = Client::open(redis_url)
            .map_err(|e| CacheError::Connection(format!("Failed to create Redis client: {e}")))?;

        let conn = ConnectionManager::new(client)
            .await
            .map_err(|e| CacheError::Connection(format!("Failed to connect to Redis: {e}")))?;

        let mut probe = conn.clone();
        probe
            .ping::<()>()
            .await
            .map_err(|e| CacheError::Connection(format!("Redis PING failed: {e}")))?;

        info!("Connected to Redis");

        Ok(Self { conn, ttl_seconds })
    }

    fn key(short_code: &str) -> String {
        format!("{KEY_PREFIX}{short_code}")
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_url(&self, short_code: &str) -> CacheResult<Option<String>> {
        let mut conn = self.conn.clone();

        match conn.get::<_, Option<String>>(Self::key(short_code)).await {
            Ok(hit) => {
                debug!(code = short_code, hit = hit.is_some(), "Cache lookup");
                Ok(hit)
            }
            Err(e) => {
                warn!(code = short_code, error = %e, "Redis GET failed");
                Ok(None)
            }
        }
    }

    async fn set_url(&self, short_code: &str, original_url: &str) -> CacheResult<()> {
        let mut conn = self.conn.clone();

        if let Err(e) = conn
            .set_ex::<_, _, ()>(Self::key(short_code), original_url, self.ttl_seconds)
            .await
        {
            warn!(code = short_code, error = %e, "Redis SET failed");
        }

        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_namespaced() {
        assert_eq!(RedisCache::key("aB3dEf"), "shortlink:code:aB3dEf");
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let result = RedisCache::connect("not-a-redis-url", 60).await;
        assert!(matches!(result, Err(CacheError::Connection(_))));
    }
}
