//! Redis-backed cache implementation.

use super::service::{CacheError, CacheResult, CacheService};
use async_trait::async_trait;
use bytes::Bytes;
use redis::{AsyncCommands, Client, aio::ConnectionManager};
use std::time::Duration;
use tracing::{debug, info};

/// Redis cache implementation shared between service instances.
///
/// Uses connection pooling via `ConnectionManager` for efficient connection reuse.
/// Backend errors are returned to the caller; the placeholder responder does
/// not mask them.
pub struct RedisCache {
    client: ConnectionManager,
    default_ttl: Duration,
    key_prefix: String,
}

impl RedisCache {
    /// Connects to Redis, validates the connection with a PING, and configures the default TTL.
    ///
    /// # Arguments
    ///
    /// - `redis_url` - Redis connection string (e.g., `"redis://localhost:6379"`)
    /// - `default_ttl` - TTL applied when [`CacheService::set`] is called with `ttl = None`;
    ///   controlled via `CACHE_TTL_SECONDS` env var
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::ConnectionError`] if the URL is invalid, the connection cannot
    /// be established, or the PING health check fails.
    pub async fn connect(redis_url: &str, default_ttl: Duration) -> CacheResult<Self> {
        info!("Connecting to Redis");

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

        info!("Connected to Redis");

        Ok(Self {
            client: manager,
            default_ttl,
            key_prefix: "placeholder:".to_string(),
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.key_prefix, key)
    }
}

#[async_trait]
impl CacheService for RedisCache {
    async fn get(&self, key: &str) -> CacheResult<Option<Bytes>> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();

        let value = conn
            .get::<_, Option<Vec<u8>>>(&full_key)
            .await
            .map_err(|e| CacheError::OperationError(format!("GET {}: {}", full_key, e)))?;

        match value {
            Some(bytes) => {
                debug!("Cache HIT: {}", key);
                Ok(Some(Bytes::from(bytes)))
            }
            None => {
                debug!("Cache MISS: {}", key);
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: Bytes, ttl: Option<Duration>) -> CacheResult<()> {
        let full_key = self.build_key(key);
        let mut conn = self.client.clone();
        // SET EX rejects a zero expiry.
        let ttl_seconds = ttl.unwrap_or(self.default_ttl).as_secs().max(1);

        conn.set_ex::<_, _, ()>(&full_key, value.to_vec(), ttl_seconds)
            .await
            .map_err(|e| CacheError::OperationError(format!("SET {}: {}", full_key, e)))?;

        debug!(
            "Cache SET: {} ({} bytes, TTL: {}s)",
            key,
            value.len(),
            ttl_seconds
        );
        Ok(())
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.client.clone();
        conn.ping::<()>().await.is_ok()
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
