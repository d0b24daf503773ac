//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{http::HeaderMap, response::IntoResponse};

use crate::api::routes::image_path;
use crate::error::AppError;
use crate::utils::absolute_uri::build_absolute_uri;

/// Size of the image linked from the home page.
const EXAMPLE_SIZE: (u32, u32) = (50, 50);

/// Template for the home page.
///
/// Renders `templates/home.html` with an absolute link to an example image.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub example: String,
}

/// Renders the home page.
///
/// # Endpoint
///
/// `GET /`
///
/// # Errors
///
/// Returns 400 Bad Request if the `Host` header is missing or invalid, since
/// the example link cannot be made absolute without it.
pub async fn home_handler(headers: HeaderMap) -> Result<impl IntoResponse, AppError> {
    let (width, height) = EXAMPLE_SIZE;
    let example = build_absolute_uri(&headers, &image_path(width, height))?;

    Ok(HomeTemplate { example })
}
