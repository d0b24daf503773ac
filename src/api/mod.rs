//! HTTP API layer for request/response handling.
//!
//! This layer translates HTTP requests into service calls and formats
//! responses.
//!
//! # Modules
//!
//! - [`dto`] - JSON response types
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Conditional requests, rate limiting and tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
