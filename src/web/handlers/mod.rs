//! HTML template rendering handlers.

mod home;

pub use home::{HomeTemplate, home_handler};
