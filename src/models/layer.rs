//! Layer data structure.

use crate::constants::GRID_KEY_COUNT;

/// One labeled layer extracted from the `keymap` block.
///
/// Layers are created fresh on every extraction run and never mutated
/// afterwards; their order follows the order of the child nodes in the
/// source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    /// Node name inside the `keymap` block (e.g., "`default_layer`")
    pub identifier: String,
    /// Value of the `label` property (e.g., "Base")
    pub label: String,
    /// Formatted display codes, one per binding, in source order
    pub bindings: Vec<String>,
}

impl Layer {
    /// Creates a new layer.
    pub fn new(
        identifier: impl Into<String>,
        label: impl Into<String>,
        bindings: Vec<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            label: label.into(),
            bindings,
        }
    }

    /// Number of bindings on this layer.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the layer has exactly the number of keys the split grid expects.
    #[must_use]
    pub fn is_grid_renderable(&self) -> bool {
        self.bindings.len() == GRID_KEY_COUNT
    }
}
