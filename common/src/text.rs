//! # Text Coordinates
//!
//! Shared models describing places inside a document.
//!
//! Lines and columns are both **0-based**: `line` indexes document lines and
//! `col` counts characters (not bytes, not terminal cells) from the start of
//! that line. Conversion to 1-based numbers happens only for display.

pub mod position;

pub use position::{Match, Position};
