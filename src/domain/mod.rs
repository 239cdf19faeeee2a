//! Domain layer: story data, level ordering and the list projection.

pub mod models;
pub mod projection;
pub mod errors;

pub use models::*;
pub use projection::*;
pub use errors::*;
