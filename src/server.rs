//! HTTP server initialization and runtime setup.
//!
//! Handles cache backend selection, state wiring, and Axum server lifecycle.

use crate::config::Config;
use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache, RedisCache};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;

/// Selects the cache backend described by the configuration.
///
/// - `CACHE_ENABLED=false` → [`NullCache`]
/// - Redis configured and reachable → [`RedisCache`]
/// - Otherwise (or when Redis is unreachable at startup) → [`MemoryCache`]
pub async fn build_cache(config: &Config) -> Arc<dyn CacheService> {
    if !config.cache_enabled {
        tracing::info!("Cache disabled (NullCache)");
        return Arc::new(NullCache::new());
    }

    let memory = || -> Arc<dyn CacheService> {
        Arc::new(MemoryCache::new(config.cache_max_entries, config.cache_ttl()))
    };

    match &config.redis_url {
        Some(redis_url) => match RedisCache::connect(redis_url, config.cache_ttl()).await {
            Ok(redis) => {
                tracing::info!("Cache enabled (Redis)");
                Arc::new(redis)
            }
            Err(e) => {
                tracing::warn!("Failed to connect to Redis: {}. Using MemoryCache.", e);
                memory()
            }
        },
        None => {
            tracing::info!("Cache enabled (MemoryCache)");
            memory()
        }
    }
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Cache backend (Redis, memory, or disabled)
/// - Placeholder service and shared state
/// - Axum HTTP server with graceful shutdown on Ctrl-C / SIGTERM
///
/// # Errors
///
/// Returns an error if:
/// - Router construction fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let cache = build_cache(&config).await;

    let state = AppState::new(cache, config.cache_ttl());

    let app = app_router(state, &config)?;

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves when the process receives Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(cache_enabled: bool) -> Config {
        Config {
            listen_addr: "127.0.0.1:0".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            redis_url: None,
            cache_enabled,
            cache_ttl_seconds: 3600,
            cache_max_entries: 10,
            rate_limit_replenish_ms: 100,
            rate_limit_burst: 100,
        }
    }

    #[tokio::test]
    async fn test_build_cache_defaults_to_memory() {
        let cache = build_cache(&config(true)).await;
        assert_eq!(cache.backend(), "memory");
    }

    #[tokio::test]
    async fn test_build_cache_disabled() {
        let cache = build_cache(&config(false)).await;
        assert_eq!(cache.backend(), "none");
    }
}
