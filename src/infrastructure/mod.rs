//! Infrastructure layer providing external service integrations.
//!
//! This module contains the HTTP client for the story API, the background
//! fetch workers, and process configuration.

pub mod api;
pub mod loader;
pub mod config;

pub use api::*;
pub use loader::*;
pub use config::*;
