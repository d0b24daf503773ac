//! Conditional request middleware for placeholder images.

use axum::{
    extract::{Path, Request},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::domain::etag;
use crate::domain::image_request::split_dimensions;

/// Evaluates `If-None-Match` / `If-Match` before the image handler runs.
///
/// The ETag is derived from the width/height text in the path alone, so this
/// step never touches the cache.
///
/// # Behaviour
///
/// - `If-Match` present and not matching: `412 Precondition Failed`
/// - `If-None-Match` matching: `304 Not Modified` with the `ETag` header, no body
/// - Otherwise the handler runs and successful responses get an `ETag` header
///
/// # Integration
///
/// ```rust,ignore
/// Router::new()
///     .route("/image/{dimensions}", get(placeholder_handler))
///     .route_layer(middleware::from_fn(conditional::layer));
/// ```
pub async fn layer(Path(dimensions): Path<String>, req: Request, next: Next) -> Response {
    let (width, height) = split_dimensions(&dimensions);
    let current = etag::quote(&etag::placeholder_etag(width, height));

    if let Some(if_match) = header_str(req.headers(), header::IF_MATCH)
        && !etag::if_match(if_match, &current)
    {
        debug!("If-Match mismatch for {}", dimensions);
        return StatusCode::PRECONDITION_FAILED.into_response();
    }

    if let Some(if_none_match) = header_str(req.headers(), header::IF_NONE_MATCH)
        && etag::if_none_match(if_none_match, &current)
    {
        debug!("Not modified: {}", dimensions);
        let mut response = StatusCode::NOT_MODIFIED.into_response();
        set_etag(&mut response, &current);
        return response;
    }

    let mut response = next.run(req).await;
    if response.status().is_success() {
        set_etag(&mut response, &current);
    }
    response
}

fn header_str(headers: &HeaderMap, name: header::HeaderName) -> Option<&str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn set_etag(response: &mut Response, tag: &str) {
    if let Ok(value) = HeaderValue::from_str(tag) {
        response.headers_mut().insert(header::ETAG, value);
    }
}
