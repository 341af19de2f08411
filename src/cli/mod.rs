//! CLI command handlers.
//!
//! The tool has a single command, so `main.rs` flattens [`UpdateArgs`]
//! directly into its top-level parser.

pub mod common;
pub mod update;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use update::UpdateArgs;
