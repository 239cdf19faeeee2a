//! storydeck - terminal reader for short language-learning stories.
//!
//! Lists stories from a remote catalogue, filters and sorts them by level,
//! and shows each story with its vocabulary.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
