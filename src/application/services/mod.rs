//! Business logic services for the application layer.

pub mod placeholder_service;

pub use placeholder_service::PlaceholderService;
