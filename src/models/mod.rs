//! Data models for keymap layers and their bindings.

pub mod binding;
pub mod layer;

pub use binding::{Behavior, Binding};
pub use layer::Layer;
