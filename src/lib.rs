//! # Placeholder
//!
//! An HTTP service that serves placeholder PNG images of any requested size,
//! built with Axum.
//!
//! ## Architecture
//!
//! The crate keeps the same layer separation throughout:
//!
//! - **Domain Layer** ([`domain`]) - Image request validation, ETags, output formats
//! - **Application Layer** ([`application`]) - Cache-or-render orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - Cache backends and image rendering
//! - **API Layer** ([`api`]) - Image and health handlers, conditional request middleware
//! - **Web Layer** ([`web`]) - HTML home page
//!
//! ## Features
//!
//! - `GET /image/{width}x{height}/` for any size from 1x1 to 2000x2000
//! - Size label drawn on the image when it fits
//! - Encoded images cached for an hour (memory or Redis)
//! - ETag validators with `304 Not Modified` short-circuiting
//! - Rate limiting and structured logging
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional
//! cargo run
//! curl -o 640x480.png http://localhost:8000/image/640x480/
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::PlaceholderService;
    pub use crate::domain::{ImageRequest, ImageRequestError, OutputFormat};
    pub use crate::error::AppError;
    pub use crate::infrastructure::cache::{CacheService, MemoryCache, NullCache};
    pub use crate::state::AppState;
}
