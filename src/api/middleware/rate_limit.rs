//! Rate limiting middleware using token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

/// Creates a per-IP rate limiter for image endpoints.
///
/// # Limits
///
/// - **Replenish**: one request every `replenish_ms` milliseconds
/// - **Burst**: `burst` requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Rate limits are applied per client IP address extracted from the
/// socket peer address, so the server must be started with connect info.
///
/// # Errors
///
/// Returns an error if either value is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/image/{dimensions}", get(placeholder_handler))
///     .layer(rate_limit::layer(100, 100)?);
/// ```
pub fn layer(
    replenish_ms: u64,
    burst: u32,
) -> Result<GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_millisecond(replenish_ms)
            .burst_size(burst)
            .finish()
            .context("rate limit values must be greater than 0")?,
    );

    Ok(GovernorLayer::new(governor_conf))
}
