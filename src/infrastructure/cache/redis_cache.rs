//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService, CachedLink};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use tracing::{debug, info};

/// Redis cache for fast short code resolution.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection
/// reuse. Snapshots are stored as JSON under a namespaced key. Errors
/// propagate as [`CacheError`]; the redirect path converts them to misses.
pub struct RedisCache {
    client: ConnectionManager,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the
    /// connection cannot be established, or the PING health check fails.
    pub async fn connect(redis_url: &str) -> CacheResult<Self> {
        let client = Client::open(redis_url).map_err(|e| {
            CacheError::ConnectionError(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = ConnectionManager::new(client).await.map_err(|e| {
            CacheError::ConnectionError(format!("Failed to connect to Redis: {}", e))
        })?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| CacheError::ConnectionError(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis");

        Ok(Self {
            client: manager,
            key_prefix: "link:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, short_code: &str) -> String {
        format!("{}{}", self.key_prefix, short_code)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get_link(&self, short_code: &str) -> CacheResult<Option<CachedLink>> {
        let key = self.build_key(short_code);
        let mut conn = self.client.clone();

        let payload: Option<String> = conn
            .get(&key)
            .await
            .map_err(|e| CacheError::OperationError(format!("GET {}: {}", key, e)))?;

        match payload {
            Some(json) => {
                let link: CachedLink = serde_json::from_str(&json).map_err(|e| {
                    CacheError::OperationError(format!("decode {}: {}", key, e))
                })?;
                debug!("Cache HIT: {}", short_code);
                Ok(Some(link))
            }
            None => {
                debug!("Cache MISS: {}", short_code);
                Ok(None)
            }
        }
    }

    async fn set_link(
        &self,
        short_code: &str,
        link: &CachedLink,
        ttl_seconds: u64,
    ) -> CacheResult<()> {
        let key = self.build_key(short_code);
        let mut conn = self.client.clone();

        let payload = serde_json::to_string(link)
            .map_err(|e| CacheError::OperationError(format!("encode {}: {}", key, e)))?;

        conn.set_ex::<_, _, ()>(&key, payload, ttl_seconds)
            .await
            .map_err(|e| CacheError::OperationError(format!("SETEX {}: {}", key, e)))?;

        debug!("Cache SET: {} (TTL: {}s)", short_code, ttl_seconds);
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }
}
