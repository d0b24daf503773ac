//! Utility functions for request handling.
//!
//! - [`absolute_uri`] - Absolute URL construction from HTTP headers

pub mod absolute_uri;
