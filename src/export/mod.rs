//! Markdown export for keymap layers.
//!
//! This module renders extracted layers as centered markdown tables shaped
//! like a split keyboard, ready to be spliced into a README.

pub mod layer_table;
pub mod markdown_table;

pub use layer_table::{
    generate_layout_markdown, generate_layout_markdown_str, render_layer_section,
    render_layers_markdown, split_grid_rows,
};
pub use markdown_table::render_table;
