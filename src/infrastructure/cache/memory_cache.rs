//! In-process cache backed by `moka`.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use bytes::Bytes;
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};
use tracing::debug;

#[derive(Clone)]
struct Entry {
    bytes: Bytes,
    ttl: Duration,
}

/// Expires every entry after the TTL it was written with.
struct PerEntryTtl;

impl Expiry<String, Entry> for PerEntryTtl {
    fn expire_after_create(&self, _key: &String, value: &Entry, _created_at: Instant) -> Option<Duration> {
        Some(value.ttl)
    }

    fn expire_after_update(
        &self,
        _key: &String,
        value: &Entry,
        _updated_at: Instant,
        _duration_until_expiry: Option<Duration>,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

/// Bounded in-memory cache with per-entry expiry.
///
/// The default backend when Redis is not configured. Entries are local to the
/// process, so each instance renders its own copy on first request.
pub struct MemoryCache {
    inner: Cache<String, Entry>,
    default_ttl: Duration,
}

impl MemoryCache {
    /// Creates a cache holding at most `max_entries` images.
    ///
    /// `default_ttl` applies when [`CacheService::set`] is called without a TTL.
    pub fn new(max_entries: u64, default_ttl: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_entries)
            .expire_after(PerEntryTtl)
            .build();

        debug!(
            "Using MemoryCache (capacity: {}, default TTL: {}s)",
            max_entries,
            default_ttl.as_secs()
        );

        Self { inner, default_ttl }
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get(&self, key: &str) -> CacheResult<Option<Bytes>> {
        match self.inner.get(key).await {
            Some(entry) => {
                debug!("Cache HIT: {}", key);
                Ok(Some(entry.bytes))
            }
            None => {
                debug!("Cache MISS: {}", key);
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: Bytes, ttl: Option<Duration>) -> CacheResult<()> {
        let ttl = ttl.unwrap_or(self.default_ttl);
        debug!("Cache SET: {} ({} bytes, TTL: {}s)", key, value.len(), ttl.as_secs());

        self.inner
            .insert(key.to_string(), Entry { bytes: value, ttl })
            .await;
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
