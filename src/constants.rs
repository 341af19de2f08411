//! Application-wide constants.
//!
//! This module defines the binary name, default file locations and the
//! fixed geometry of the split keyboard grid rendered into the README.

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "keymap-readme";

/// Default README path, relative to the working directory.
pub const DEFAULT_README_PATH: &str = "readme.md";

/// Default keymap path, relative to the working directory.
pub const DEFAULT_KEYMAP_PATH: &str = "config/kometa.keymap";

/// Heading of the README section that receives the generated tables.
pub const DEFAULT_SECTION_HEADING: &str = "## Раскладка";

/// Name of the top-level block holding the layers.
pub const KEYMAP_BLOCK_NAME: &str = "keymap";

/// Leading character of a behavior reference inside `bindings`.
pub const SIGIL: char = '&';

/// Rows in the main (non-thumb) part of the grid.
pub const MAIN_ROWS: usize = 3;

/// Keys per main row, both halves together.
pub const MAIN_COLS: usize = 12;

/// Keys per main row on one half.
pub const HALF_COLS: usize = MAIN_COLS / 2;

/// Blank columns between the two halves.
pub const SPLIT_GAP_COLS: usize = 2;

/// Keys in the shared thumb cluster.
pub const THUMB_KEYS: usize = 6;

/// Blank columns on each side of the thumb cluster.
pub const THUMB_PAD_COLS: usize = 4;

/// Columns of the rendered markdown table.
pub const TABLE_COLS: usize = MAIN_COLS + SPLIT_GAP_COLS;

/// Number of bindings a layer needs to be rendered as a grid.
pub const GRID_KEY_COUNT: usize = MAIN_ROWS * MAIN_COLS + THUMB_KEYS;

/// Minimum dash count in a table separator cell.
pub const MIN_SEPARATOR_DASHES: usize = 3;

/// Line written under the heading when no layers could be extracted.
pub const NO_LAYERS_PLACEHOLDER: &str = "_Не удалось найти слои/биндинги в keymap._";

/// Environment variable overriding the config file location.
pub const CONFIG_PATH_ENV: &str = "KEYMAP_README_CONFIG";
