//! README section replacement.
//!
//! The README is split by line index into the part up to and including the
//! layout heading, the old section body, and everything from the next heading
//! of the same or a higher level. The body is replaced wholesale, so running
//! an update twice in a row leaves the file unchanged.

use crate::export::render_layers_markdown;
use crate::parser::parse_keymap_file;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a README update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateSummary {
    /// Layers found in the keymap
    pub layer_count: usize,
    /// Layers rendered as a plain list because their key count was off
    pub listed_layer_count: usize,
    /// Whether the README content changed (and was written)
    pub changed: bool,
}

/// Number of leading `#` characters of a heading line (0 if not a heading).
fn heading_level(line: &str) -> usize {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    let rest = &line[hashes..];
    if hashes > 0 && (rest.is_empty() || rest.starts_with(char::is_whitespace)) {
        hashes
    } else {
        0
    }
}

/// Index of the first line after `start` that ends the section, skipping
/// anything inside fenced code blocks.
///
/// A fence left open until the end of the document is treated as stray: the
/// scan is repeated without fence tracking so later sections are kept.
fn section_end(lines: &[String], start: usize, max_level: usize) -> usize {
    let mut in_fence = false;

    for (idx, line) in lines.iter().enumerate().skip(start + 1) {
        if line.trim_start().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if ends_section(line, max_level) {
            return idx;
        }
    }

    if in_fence {
        debug!("Unclosed code fence after the layout heading, ignoring fences");
        if let Some(idx) =
            (start + 1..lines.len()).find(|&idx| ends_section(&lines[idx], max_level))
        {
            return idx;
        }
    }

    lines.len()
}

fn ends_section(line: &str, max_level: usize) -> bool {
    let level = heading_level(line);
    level > 0 && level <= max_level
}

/// Replaces the body of the section under `heading` with `generated`.
///
/// The heading line is matched with surrounding whitespace ignored. When the
/// heading is missing it is appended at the end of the document, after one
/// blank separator line. The new body is one blank line followed by
/// `generated`; everything from the next heading of the same or a higher
/// level onward is kept as is.
///
/// # Example
///
/// ```
/// use keymap_readme::services::readme::splice_section;
///
/// let readme = "# Kometa\n\n## Раскладка\nold\n## Прошивка\nflash\n";
/// let updated = splice_section(readme, "## Раскладка", "new\n");
/// assert_eq!(updated, "# Kometa\n\n## Раскладка\n\nnew\n## Прошивка\nflash\n");
/// ```
pub fn splice_section(readme: &str, heading: &str, generated: &str) -> String {
    let heading = heading.trim();
    let mut lines: Vec<String> = readme.split_inclusive('\n').map(str::to_string).collect();

    let start = if let Some(idx) = lines.iter().position(|line| line.trim() == heading) {
        if !lines[idx].ends_with('\n') {
            lines[idx].push('\n');
        }
        idx
    } else {
        debug!("Heading `{}` not found, appending it", heading);
        if let Some(last) = lines.last_mut() {
            if !last.ends_with('\n') {
                last.push('\n');
            }
        }
        if lines.last().is_some_and(|line| !line.trim().is_empty()) {
            lines.push("\n".to_string());
        }
        lines.push(format!("{heading}\n"));
        lines.len() - 1
    };

    let end = section_end(&lines, start, heading_level(heading));

    let mut output: String = lines[..=start].concat();
    output.push('\n');
    output.push_str(generated);
    if !generated.ends_with('\n') {
        output.push('\n');
    }
    output.push_str(&lines[end..].concat());

    output
}

/// Writes `content` through a sibling temp file and a rename, so a failed
/// write never leaves a truncated README behind.
fn atomic_write(path: &Path, content: &str) -> Result<()> {
    let temp_path = temp_path_for(path);

    std::fs::write(&temp_path, content)
        .with_context(|| format!("Failed to write to temporary file: {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) => path.with_extension(format!("{}.tmp", ext.to_string_lossy())),
        None => path.with_extension("tmp"),
    }
}

/// Service that regenerates the layout section of a README.
pub struct ReadmeService;

impl ReadmeService {
    /// Regenerates the section under `heading` in the README at `readme_path`
    /// from the keymap at `keymap_path`.
    ///
    /// Both files are read completely and the keymap is parsed before anything
    /// is written, so any failure leaves the README untouched. When the result
    /// equals the current content the file is not rewritten.
    ///
    /// # Errors
    ///
    /// Returns errors for:
    /// - README or keymap file not found or unreadable
    /// - Unbalanced braces in the keymap
    /// - Failure writing the README
    pub fn update(readme_path: &Path, keymap_path: &Path, heading: &str) -> Result<UpdateSummary> {
        let current = std::fs::read_to_string(readme_path)
            .with_context(|| format!("Failed to read README: {}", readme_path.display()))?;

        let layers = parse_keymap_file(keymap_path)?;
        let generated = render_layers_markdown(&layers);
        let updated = splice_section(&current, heading, &generated);

        let changed = updated != current;
        if changed {
            atomic_write(readme_path, &updated)?;
            info!(
                "Wrote {} layers to {}",
                layers.len(),
                readme_path.display()
            );
        } else {
            info!("{} is already up to date", readme_path.display());
        }

        Ok(UpdateSummary {
            layer_count: layers.len(),
            listed_layer_count: layers.iter().filter(|l| !l.is_grid_renderable()).count(),
            changed,
        })
    }
}
