//! Top-level router configuration combining image, page and health routes.
//!
//! # Route Structure
//!
//! - `GET  /`                       - Home page with an example link (public)
//! - `GET  /image/{width}x{height}` - Placeholder PNG (rate limited)
//! - `GET  /health`                 - Health check: cache backend (public)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket on image routes
//! - **Conditional requests** - ETag evaluation ahead of the image handler
//! - **Path normalization** - Trailing slash handling (`/image/50x50/` works)

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;
use crate::web;
use anyhow::Result;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - supplies the rate limit settings for image routes
///
/// # Errors
///
/// Returns an error if the rate limit settings are invalid.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let image_router = api::routes::image_routes().layer(rate_limit::layer(
        config.rate_limit_replenish_ms,
        config.rate_limit_burst,
    )?);

    let router = Router::new()
        .merge(web::routes::public_routes())
        .merge(image_router)
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer());

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}
