//! Presentation layer handling terminal UI and user input.
//!
//! This module renders the story list and story detail views with ratatui
//! and maps key presses to view changes and fetch requests.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
