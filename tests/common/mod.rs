#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum::routing::get;
use bytes::Bytes;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use placeholder::api::handlers::health_handler;
use placeholder::api::routes::image_routes;
use placeholder::infrastructure::cache::{CacheResult, CacheService, MemoryCache};
use placeholder::state::AppState;
use placeholder::web::routes::public_routes;

pub const TTL: Duration = Duration::from_secs(3600);

/// Memory cache that counts every call made through it.
pub struct CountingCache {
    inner: MemoryCache,
    gets: AtomicUsize,
    sets: AtomicUsize,
    healthy: bool,
}

impl CountingCache {
    pub fn new() -> Self {
        Self::with_health(true)
    }

    pub fn with_health(healthy: bool) -> Self {
        Self {
            inner: MemoryCache::new(100, TTL),
            gets: AtomicUsize::new(0),
            sets: AtomicUsize::new(0),
            healthy,
        }
    }

    pub fn gets(&self) -> usize {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn sets(&self) -> usize {
        self.sets.load(Ordering::SeqCst)
    }

    pub async fn peek(&self, key: &str) -> Option<Bytes> {
        self.inner.get(key).await.unwrap()
    }

    pub async fn seed(&self, key: &str, value: &'static [u8]) {
        self.inner
            .set(key, Bytes::from_static(value), None)
            .await
            .unwrap();
    }
}

#[async_trait]
impl CacheService for CountingCache {
    async fn get(&self, key: &str) -> CacheResult<Option<Bytes>> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: Bytes, ttl: Option<Duration>) -> CacheResult<()> {
        self.sets.fetch_add(1, Ordering::SeqCst);
        self.inner.set(key, value, ttl).await
    }

    async fn health_check(&self) -> bool {
        self.healthy
    }

    fn backend(&self) -> &'static str {
        "counting"
    }
}

pub fn create_test_state() -> (AppState, Arc<CountingCache>) {
    create_test_state_with(CountingCache::new())
}

pub fn create_test_state_with(cache: CountingCache) -> (AppState, Arc<CountingCache>) {
    let cache = Arc::new(cache);
    let state = AppState::new(cache.clone(), TTL);
    (state, cache)
}

/// Image, page and health routes without rate limiting or path normalization.
pub fn test_app(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(image_routes())
        .route("/health", get(health_handler))
        .with_state(state)
}
