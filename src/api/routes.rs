//! Image route configuration.

use crate::api::handlers::placeholder_handler;
use crate::api::middleware::conditional;
use crate::state::AppState;
use axum::{Router, middleware, routing::get};

/// Canonical path of the placeholder image for a given size.
pub fn image_path(width: u32, height: u32) -> String {
    format!("/image/{}x{}/", width, height)
}

/// Placeholder image routes with conditional request handling.
///
/// # Endpoints
///
/// - `GET /image/{width}x{height}` - PNG placeholder (`HEAD` served by the same route)
///
/// The ETag step is a route layer so it only runs for matched routes and can
/// read the path parameter.
pub fn image_routes() -> Router<AppState> {
    Router::new()
        .route("/image/{dimensions}", get(placeholder_handler))
        .route_layer(middleware::from_fn(conditional::layer))
}
