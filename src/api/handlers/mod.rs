//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod health;
pub mod placeholder;

pub use health::health_handler;
pub use placeholder::placeholder_handler;
