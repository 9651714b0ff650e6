//! ANSI-aware column formatting for terminal tables.
//!
//! [`Grid`] lays out a header row and data rows as a borderless, padded
//! grid clamped to a target display width. The [`util`] helpers measure,
//! pad, and truncate text without counting ANSI escape codes toward width.

mod grid;
pub mod util;

pub use grid::Grid;
pub use util::{display_width, pad_right, truncate_end};
