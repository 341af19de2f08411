//! Parsing of ZMK keymap sources.
//!
//! This module strips comments, scans brace-delimited blocks, extracts the
//! labeled layers of the `keymap` block and turns raw `bindings` text into
//! display codes.

pub mod bindings;
pub mod blocks;
pub mod comments;
pub mod keymap;

// Re-export commonly used functions
pub use bindings::parse_bindings;
pub use blocks::{find_brace_block, find_keymap_block, ParseError};
pub use comments::strip_comments;
pub use keymap::{extract_layers, parse_keymap_file};
