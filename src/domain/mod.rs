//! Domain layer containing the placeholder request model and its rules.
//!
//! Nothing in here touches HTTP, caches or pixel buffers; handlers and
//! services build on these types.
//!
//! # Modules
//!
//! - [`image_request`] - Width/height parsing, validation and cache keys
//! - [`etag`] - ETag derivation and conditional header matching
//! - [`output_format`] - Encodings the service can produce

pub mod etag;
pub mod image_request;
pub mod output_format;

pub use image_request::{Dimension, ImageRequest, ImageRequestError};
pub use output_format::OutputFormat;
