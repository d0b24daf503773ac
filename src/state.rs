use std::sync::Arc;

use crate::application::services::PlaceholderService;
use crate::infrastructure::cache::CacheService;

#[derive(Clone)]
pub struct AppState {
    pub placeholder_service: Arc<PlaceholderService<dyn CacheService>>,
    pub cache: Arc<dyn CacheService>,
}

impl AppState {
    /// Builds the state around a single shared cache.
    pub fn new(cache: Arc<dyn CacheService>, ttl: std::time::Duration) -> Self {
        Self {
            placeholder_service: Arc::new(PlaceholderService::new(cache.clone(), ttl)),
            cache,
        }
    }
}
