//! Layer extraction from ZMK `.keymap` sources.
//!
//! Only the subset of device-tree syntax a keymap uses is understood: the
//! first `keymap { ... }` block, its direct child nodes, and the `label` and
//! `bindings` properties of each child.

use crate::models::Layer;
use crate::parser::bindings::parse_bindings;
use crate::parser::blocks::{find_brace_block, find_keymap_block, ParseError};
use crate::parser::comments::strip_comments;
use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use tracing::debug;

/// Child node header: `name {`.
static NODE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Za-z_][A-Za-z0-9_-]*)\s*\{").expect("node header pattern is valid")
});

/// `label = "...";` starting at a property boundary.
static LABEL_PROP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:^|[^\w-])label\s*=\s*"([^"]+)"\s*;"#).expect("label pattern is valid")
});

/// `bindings = < ... >;` starting at a property boundary, so `sensor-bindings` is skipped.
static BINDINGS_PROP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)(?:^|[^\w-])bindings\s*=\s*<(.*?)>\s*;").expect("bindings pattern is valid")
});

/// Extracts every labeled layer from keymap source text.
///
/// Layers come back in source order. A source without a `keymap` block yields
/// an empty list, and child nodes lacking a `label` or a `bindings` property
/// are skipped.
///
/// # Errors
///
/// [`ParseError::UnbalancedBraces`] if the `keymap` block or one of its
/// children is never closed.
pub fn extract_layers(text: &str) -> Result<Vec<Layer>, ParseError> {
    let text = strip_comments(text);

    let Some(keymap_body) = find_keymap_block(&text)? else {
        debug!("No `keymap` block found");
        return Ok(Vec::new());
    };

    let mut layers = Vec::new();
    let mut cursor = 0;

    while let Some(captures) = NODE_HEADER.captures_at(keymap_body, cursor) {
        let (Some(header), Some(identifier)) = (captures.get(0), captures.get(1)) else {
            break;
        };
        let identifier = identifier.as_str();

        let open_idx = header.end() - 1;
        let (body, close_idx) = find_brace_block(keymap_body, open_idx)?;
        cursor = close_idx + 1;

        match parse_layer_node(identifier, body) {
            Some(layer) => {
                debug!(
                    "Layer `{}` ({}): {} bindings",
                    layer.identifier,
                    layer.label,
                    layer.key_count()
                );
                layers.push(layer);
            }
            None => debug!(
                "Skipping `{}`: node has no label or no bindings property",
                identifier
            ),
        }
    }

    Ok(layers)
}

/// Builds a layer from one child node body, if it carries both properties.
fn parse_layer_node(identifier: &str, body: &str) -> Option<Layer> {
    let label = LABEL_PROP.captures(body)?.get(1)?.as_str();
    let bindings_raw = BINDINGS_PROP.captures(body)?.get(1)?.as_str();

    Some(Layer::new(identifier, label, parse_bindings(bindings_raw)))
}

/// Reads a keymap file and extracts its layers.
///
/// # Errors
///
/// Returns errors for:
/// - File not found or unreadable
/// - Unbalanced braces in the source
pub fn parse_keymap_file(path: &Path) -> Result<Vec<Layer>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read keymap file: {}", path.display()))?;

    extract_layers(&text).with_context(|| format!("Failed to parse keymap file: {}", path.display()))
}
