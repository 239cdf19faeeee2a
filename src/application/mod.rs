//! Application layer managing view state and navigation.
//!
//! This module coordinates between the domain layer and presentation layer:
//! it turns navigation into fetch requests and fetch outcomes into view state.

pub mod state;
pub mod routes;

pub use state::*;
pub use routes::*;
