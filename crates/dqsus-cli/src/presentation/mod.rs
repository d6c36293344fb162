//! Presentation layer for CLI output formatting.

pub mod progress;
pub mod tables;

pub use progress::fetch_progress;
pub use tables::{render_table, truncate_cell};
