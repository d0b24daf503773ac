//! Application error type and its HTTP mapping.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::domain::ImageRequestError;
use crate::infrastructure::cache::CacheError;
use crate::infrastructure::render::RenderError;

/// Fixed body returned for any rejected image request.
pub const INVALID_IMAGE_REQUEST: &str = "Invalid Image Request.";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid image request: {0}")]
    InvalidImageRequest(#[from] ImageRequestError),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidImageRequest(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Render(_) | AppError::Cache(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            AppError::InvalidImageRequest(reason) => {
                tracing::debug!("Rejected image request: {}", reason);
                INVALID_IMAGE_REQUEST.to_string()
            }
            AppError::BadRequest(message) => message,
            other => {
                tracing::error!("Request failed: {}", other);
                "Internal Server Error".to_string()
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response()
    }
}
