//! Application layer services implementing business logic.
//!
//! Services combine domain rules with infrastructure reached through traits,
//! giving HTTP handlers a single call per operation.
//!
//! # Available Services
//!
//! - [`services::placeholder_service::PlaceholderService`] - Cached placeholder image generation

pub mod services;
