//! Update command: regenerate the README layout section from the keymap.

use crate::cli::common::{CliError, CliResult};
use crate::config::Config;
use crate::services::{ReadmeService, UpdateSummary};
use clap::Args;
use std::path::PathBuf;
use tracing::debug;

/// Update README layout tables from a ZMK keymap
#[derive(Debug, Clone, Default, Args)]
pub struct UpdateArgs {
    /// Path to README.md (defaults to readme.md or the configured path)
    #[arg(long, value_name = "FILE")]
    pub readme: Option<PathBuf>,

    /// Path to .keymap (defaults to config/kometa.keymap or the configured path)
    #[arg(long, value_name = "FILE")]
    pub keymap: Option<PathBuf>,
}

impl UpdateArgs {
    /// Execute the update command with the configuration from disk.
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load().map_err(|e| CliError::config(format!("{e:#}")))?;
        self.execute_with(&config).map(|_| ())
    }

    /// Execute the update command with an already loaded configuration.
    pub fn execute_with(&self, config: &Config) -> CliResult<UpdateSummary> {
        let (readme_path, keymap_path) = self.resolve_paths(config);
        debug!(
            "README: {}, keymap: {}",
            readme_path.display(),
            keymap_path.display()
        );

        let summary = ReadmeService::update(
            &readme_path,
            &keymap_path,
            &config.readme.section_heading,
        )
        .map_err(|e| CliError::from_update_error(&e))?;

        if summary.changed {
            println!(
                "✓ Updated layout section in {} ({} layers)",
                readme_path.display(),
                summary.layer_count
            );
        } else {
            println!("✓ {} is already up to date", readme_path.display());
        }

        Ok(summary)
    }

    /// Command-line paths win over configured ones.
    fn resolve_paths(&self, config: &Config) -> (PathBuf, PathBuf) {
        let readme = self
            .readme
            .clone()
            .unwrap_or_else(|| config.paths.readme.clone());
        let keymap = self
            .keymap
            .clone()
            .unwrap_or_else(|| config.paths.keymap.clone());
        (readme, keymap)
    }
}
