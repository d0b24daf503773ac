//! HTTP middleware for request processing and protection.
//!
//! Provides conditional request handling, rate limiting, and observability middleware.

pub mod conditional;
pub mod rate_limit;
pub mod tracing;
