//! Cache-or-render orchestration for placeholder images.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tracing::debug;

use crate::domain::{ImageRequest, OutputFormat};
use crate::error::AppError;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::render::render_placeholder;

/// Default lifetime of a cached image.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Service producing encoded placeholder images.
///
/// Looks the request up in the injected cache and renders on miss. Concurrent
/// misses for the same key each render and store; the last write wins.
pub struct PlaceholderService<C: CacheService + ?Sized> {
    cache: Arc<C>,
    ttl: Duration,
    format: OutputFormat,
}

impl<C: CacheService + ?Sized> PlaceholderService<C> {
    /// Creates a PNG-producing service storing entries for `ttl`.
    pub fn new(cache: Arc<C>, ttl: Duration) -> Self {
        Self {
            cache,
            ttl,
            format: OutputFormat::Png,
        }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the encoded image for a validated request.
    ///
    /// # Cache Strategy
    ///
    /// - **Hit**: stored bytes are returned unchanged
    /// - **Miss**: render on the blocking pool, store with the service TTL, return
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Cache`] if the cache backend fails and
    /// [`AppError::Render`] if encoding fails. Neither is retried.
    pub async fn generate(&self, request: ImageRequest) -> Result<Bytes, AppError> {
        let key = request.cache_key(self.format);

        if let Some(bytes) = self.cache.get(&key).await? {
            debug!("Cache HIT for {}", key);
            return Ok(bytes);
        }
        debug!("Cache MISS for {}", key);

        let format = self.format;
        let bytes = tokio::task::spawn_blocking(move || render_placeholder(&request, format))
            .await
            .map_err(|e| AppError::internal(format!("Render task failed: {}", e)))??;

        debug!("Rendered {} ({} bytes)", key, bytes.len());

        self.cache.set(&key, bytes.clone(), Some(self.ttl)).await?;

        Ok(bytes)
    }
}
