//! Split keyboard grid rendering for keymap layers.
//!
//! A 42-key layer is drawn as a 14-column table:
//!
//! ```text
//! | L L L L L L | _ _ | R R R R R R |   x3 main rows
//! | _ _ _ _ | T T T T T T | _ _ _ _ |   thumb row
//! ```
//!
//! Layers with any other key count are listed in a fenced block instead,
//! since the column math only holds for the exact grid.

use crate::constants::{
    GRID_KEY_COUNT, HALF_COLS, MAIN_COLS, MAIN_ROWS, NO_LAYERS_PLACEHOLDER, SPLIT_GAP_COLS,
    TABLE_COLS, THUMB_PAD_COLS,
};
use crate::export::markdown_table::render_table;
use crate::models::Layer;
use crate::parser::{extract_layers, parse_keymap_file, ParseError};
use anyhow::Result;
use std::path::Path;
use tracing::warn;

/// One rendered table row.
pub type GridRow = [String; TABLE_COLS];

/// Reshapes exactly [`GRID_KEY_COUNT`] bindings into the four table rows.
///
/// Returns `None` for any other count.
pub fn split_grid_rows(bindings: &[String]) -> Option<Vec<GridRow>> {
    if bindings.len() != GRID_KEY_COUNT {
        return None;
    }

    let (main, thumbs) = bindings.split_at(MAIN_ROWS * MAIN_COLS);

    let mut rows: Vec<GridRow> = main
        .chunks(MAIN_COLS)
        .map(|keys| {
            let (left, right) = keys.split_at(HALF_COLS);
            std::array::from_fn(|col| {
                if col < HALF_COLS {
                    left[col].clone()
                } else if col < HALF_COLS + SPLIT_GAP_COLS {
                    String::new()
                } else {
                    right[col - HALF_COLS - SPLIT_GAP_COLS].clone()
                }
            })
        })
        .collect();

    rows.push(std::array::from_fn(|col| {
        col.checked_sub(THUMB_PAD_COLS)
            .and_then(|idx| thumbs.get(idx))
            .cloned()
            .unwrap_or_default()
    }));

    Some(rows)
}

/// Renders one layer as a `### <label>` block.
///
/// The block ends with a newline. A layer that does not have exactly
/// [`GRID_KEY_COUNT`] bindings gets a warning line and a plain listing.
pub fn render_layer_section(layer: &Layer) -> String {
    let mut out = vec![format!("### {}", layer.label), String::new()];

    match split_grid_rows(&layer.bindings) {
        Some(rows) => {
            out.extend(render_table(&rows));
        }
        None => {
            warn!(
                "Layer `{}` has {} bindings, expected {}; rendering as a list",
                layer.identifier,
                layer.key_count(),
                GRID_KEY_COUNT
            );
            out.push(format!(
                "_Warning: ожидается {} клавиши, найдено {}. Печатаю списком._",
                GRID_KEY_COUNT,
                layer.key_count()
            ));
            out.push(String::new());
            out.push("```".to_string());
            out.push(layer.bindings.join("\n"));
            out.push("```".to_string());
        }
    }

    out.push(String::new());
    out.join("\n")
}

/// Renders all layers into the markdown placed under the README heading.
///
/// Blocks are separated by one blank line and the result ends with exactly
/// one newline. With no layers, the result is the single placeholder line.
pub fn render_layers_markdown(layers: &[Layer]) -> String {
    if layers.is_empty() {
        return format!("{NO_LAYERS_PLACEHOLDER}\n");
    }

    let blocks: Vec<String> = layers.iter().map(render_layer_section).collect();
    format!("{}\n", blocks.join("\n").trim_end())
}

/// Extracts layers from keymap source text and renders them.
pub fn generate_layout_markdown_str(keymap_text: &str) -> Result<String, ParseError> {
    let layers = extract_layers(keymap_text)?;
    Ok(render_layers_markdown(&layers))
}

/// Reads a keymap file and renders its layers.
///
/// # Errors
///
/// Returns errors for an unreadable file or unbalanced braces.
pub fn generate_layout_markdown(keymap_path: &Path) -> Result<String> {
    let layers = parse_keymap_file(keymap_path)?;
    Ok(render_layers_markdown(&layers))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered_bindings(count: usize) -> Vec<String> {
        (0..count).map(|i| format!("K{i}")).collect()
    }

    #[test]
    fn test_split_grid_rows_shape() {
        let rows = split_grid_rows(&numbered_bindings(42)).unwrap();
        assert_eq!(rows.len(), 4);

        assert_eq!(rows[0][0], "K0");
        assert_eq!(rows[0][5], "K5");
        assert_eq!(rows[0][6], "");
        assert_eq!(rows[0][7], "");
        assert_eq!(rows[0][8], "K6");
        assert_eq!(rows[0][13], "K11");
        assert_eq!(rows[2][13], "K35");

        let thumbs: Vec<&str> = rows[3].iter().map(String::as_str).collect();
        assert_eq!(
            thumbs,
            ["", "", "", "", "K36", "K37", "K38", "K39", "K40", "K41", "", "", "", ""]
        );
    }

    #[test]
    fn test_split_grid_rows_wrong_count() {
        assert!(split_grid_rows(&numbered_bindings(41)).is_none());
        assert!(split_grid_rows(&numbered_bindings(0)).is_none());
    }

    #[test]
    fn test_render_grid_layer() {
        let layer = Layer::new("base", "Base", numbered_bindings(42));
        let section = render_layer_section(&layer);
        let lines: Vec<&str> = section.lines().collect();

        assert_eq!(lines[0], "### Base");
        assert_eq!(lines[1], "");
        // four content rows plus the separator
        let table: Vec<&str> = lines.iter().copied().filter(|l| l.starts_with('|')).collect();
        assert_eq!(table.len(), 5);
        for line in &table {
            assert_eq!(line.matches('|').count(), TABLE_COLS + 1);
        }
        assert!(table[1].contains(":---:"));
        assert!(section.ends_with("|\n"));
    }

    #[test]
    fn test_render_wrong_count_as_list() {
        let layer = Layer::new("fn", "Fn", numbered_bindings(10));
        let section = render_layer_section(&layer);

        assert!(section.starts_with("### Fn\n\n"));
        assert!(section.contains("42"));
        assert!(section.contains("10"));
        assert!(section.contains("```\nK0\nK1\n"));
        assert!(!section.contains('|'));
        assert!(section.ends_with("K9\n```\n"));
    }

    #[test]
    fn test_render_layers_markdown_placeholder() {
        assert_eq!(render_layers_markdown(&[]), format!("{NO_LAYERS_PLACEHOLDER}\n"));
    }

    #[test]
    fn test_render_layers_markdown_joins_blocks() {
        let layers = vec![
            Layer::new("a", "A", numbered_bindings(1)),
            Layer::new("b", "B", numbered_bindings(1)),
        ];
        let markdown = render_layers_markdown(&layers);
        assert!(markdown.contains("```\n\n### B\n"));
        assert!(markdown.ends_with("```\n"));
        assert!(!markdown.ends_with("\n\n"));
    }

    #[test]
    fn test_generate_layout_markdown_str_without_keymap() {
        let markdown = generate_layout_markdown_str("/ { behaviors { }; };").unwrap();
        assert_eq!(markdown.lines().count(), 1);
        assert_eq!(markdown.trim_end(), NO_LAYERS_PLACEHOLDER);
    }

    #[test]
    fn test_generate_layout_markdown_str_unbalanced() {
        assert!(generate_layout_markdown_str("keymap { base {").is_err());
    }

    #[test]
    fn test_generate_layout_markdown_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("kometa.keymap");
        std::fs::write(
            &path,
            "keymap { base { label = \"Base\"; bindings = <&kp A>; }; };",
        )
        .unwrap();

        let markdown = generate_layout_markdown(&path).unwrap();
        assert!(markdown.starts_with("### Base\n\n"));

        let err = generate_layout_markdown(&dir.path().join("missing.keymap")).unwrap_err();
        assert!(err.to_string().contains("Failed to read keymap file"));
    }
}
