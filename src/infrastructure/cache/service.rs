//! Cache service trait and error types.

use async_trait::async_trait;
use bytes::Bytes;
use std::fmt;
use std::time::Duration;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching encoded placeholder images.
///
/// Entries are written with an expiry and never invalidated explicitly; an
/// expired entry simply reads as a miss. Implementations must be thread-safe.
/// Concurrent writers to the same key are allowed and the last one wins.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::MemoryCache`] - In-process cache with per-entry TTL
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache shared between instances
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the bytes stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(bytes))` on cache hit
    /// - `Ok(None)` on miss or after the entry expired
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::OperationError`] if the backend fails.
    async fn get(&self, key: &str) -> CacheResult<Option<Bytes>>;

    /// Stores `value` under `key`, replacing any previous entry.
    ///
    /// # Arguments
    ///
    /// - `key` - Cache key
    /// - `value` - Encoded bytes
    /// - `ttl` - Time until the entry expires (implementation default if `None`)
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::OperationError`] if the backend fails.
    async fn set(&self, key: &str, value: Bytes, ttl: Option<Duration>) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by the health endpoint to report cache status.
    async fn health_check(&self) -> bool;

    /// Short backend name for logs and health reports.
    fn backend(&self) -> &'static str;
}
