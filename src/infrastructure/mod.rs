//! Infrastructure layer for external integrations.
//!
//! Concrete implementations the application layer depends on through traits
//! or plain functions.
//!
//! # Modules
//!
//! - [`cache`] - Caching abstractions (memory, Redis and no-op implementations)
//! - [`render`] - Canvas drawing and image encoding

pub mod cache;
pub mod render;
