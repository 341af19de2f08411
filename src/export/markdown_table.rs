//! Centered markdown table rendering.

use crate::constants::MIN_SEPARATOR_DASHES;
use std::borrow::Cow;

/// Escapes characters that would break a table cell.
///
/// A literal `|` would otherwise start a new column.
fn escape_cell(cell: &str) -> Cow<'_, str> {
    if cell.contains('|') {
        Cow::Owned(cell.replace('|', r"\|"))
    } else {
        Cow::Borrowed(cell)
    }
}

/// Pads `cell` on both sides to `width` characters, extra space going right,
/// plus one space of margin on each side.
fn format_cell(cell: &str, width: usize) -> String {
    let pad = width.saturating_sub(cell.chars().count());
    let left = pad / 2;
    let right = pad - left;
    format!(" {}{}{} ", " ".repeat(left), cell, " ".repeat(right))
}

fn separator_cell(width: usize) -> String {
    format!(" :{}: ", "-".repeat(width.max(MIN_SEPARATOR_DASHES)))
}

/// Renders rows as a markdown table with every column centered.
///
/// The first row becomes the header row and is followed by the separator
/// line. Each column is padded to its widest cell (measured in characters),
/// and separator cells use that width with a minimum of three dashes.
/// Returns no lines for no rows.
///
/// # Example
///
/// ```
/// use keymap_readme::export::render_table;
///
/// let rows = [
///     ["Q".to_string(), "".to_string()],
///     ["TAB".to_string(), "W".to_string()],
/// ];
/// assert_eq!(
///     render_table(&rows),
///     vec!["|  Q  |   |", "| :---: | :---: |", "| TAB | W |"]
/// );
/// ```
pub fn render_table<const N: usize>(rows: &[[String; N]]) -> Vec<String> {
    if rows.is_empty() {
        return Vec::new();
    }

    let escaped: Vec<[Cow<'_, str>; N]> = rows
        .iter()
        .map(|row| std::array::from_fn(|col| escape_cell(&row[col])))
        .collect();

    let mut widths = [0usize; N];
    for row in &escaped {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut lines: Vec<String> = escaped
        .iter()
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .zip(widths.iter())
                .map(|(cell, &width)| format_cell(cell, width))
                .collect();
            format!("|{}|", cells.join("|"))
        })
        .collect();

    let separator: Vec<String> = widths.iter().map(|&w| separator_cell(w)).collect();
    lines.insert(1, format!("|{}|", separator.join("|")));

    lines
}
