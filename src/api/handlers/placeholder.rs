//! Handler for placeholder image generation.

use axum::{
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};

use crate::domain::ImageRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Serves a placeholder image of the requested size.
///
/// # Endpoint
///
/// `GET /image/{width}x{height}/`
///
/// # Request Flow
///
/// 1. Parse and validate width/height (1-2000 each)
/// 2. Look the image up in the cache (key: `width.height.PNG`)
/// 3. On miss, render, store for the configured TTL
/// 4. Return the PNG bytes
///
/// Conditional headers are evaluated before this handler runs, see
/// [`crate::api::middleware::conditional`].
///
/// # Errors
///
/// Returns 400 Bad Request with `Invalid Image Request.` when validation
/// fails; no cache access happens in that case.
/// Returns 500 if the cache backend or the encoder fails.
pub async fn placeholder_handler(
    Path(dimensions): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let request = ImageRequest::from_segment(&dimensions)?;

    let service = &state.placeholder_service;
    let image = service.generate(request).await?;

    Ok((
        [
            (header::CONTENT_TYPE, service.format().content_type().to_string()),
            (
                header::CACHE_CONTROL,
                format!("public, max-age={}", service.ttl().as_secs()),
            ),
        ],
        image,
    ))
}
