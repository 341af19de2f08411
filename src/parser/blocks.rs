//! Brace-delimited block scanning.
//!
//! Only span extraction is needed, so there is no parse tree: a single pass
//! with a depth counter finds the brace that closes a block.

use crate::constants::KEYMAP_BLOCK_NAME;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Structural failure while scanning a keymap source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// An opening brace has no matching closing brace.
    #[error("Unbalanced braces (block opened at byte {open_offset} is never closed)")]
    UnbalancedBraces {
        /// Byte offset of the unmatched opening brace
        open_offset: usize,
    },
}

/// Returns the text strictly between the brace at `open_idx` and its matching
/// closing brace, together with the byte index of that closing brace.
///
/// `open_idx` must point at a `{`. Nested blocks are skipped by counting depth.
///
/// # Errors
///
/// [`ParseError::UnbalancedBraces`] if the text ends before the depth returns to zero.
pub fn find_brace_block(src: &str, open_idx: usize) -> Result<(&str, usize), ParseError> {
    let mut depth = 0usize;

    for (offset, byte) in src.as_bytes()[open_idx..].iter().enumerate() {
        match byte {
            b'{' => depth += 1,
            b'}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    let close_idx = open_idx + offset;
                    return Ok((&src[open_idx + 1..close_idx], close_idx));
                }
            }
            _ => {}
        }
    }

    Err(ParseError::UnbalancedBraces {
        open_offset: open_idx,
    })
}

/// `keymap {` as a whole word.
static KEYMAP_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\b{}\s*\{{", regex::escape(KEYMAP_BLOCK_NAME)))
        .expect("keymap header pattern is valid")
});

/// Finds the first `keymap {` block and returns its body.
///
/// Returns `Ok(None)` when no such block exists; an unterminated block is an error.
pub fn find_keymap_block(src: &str) -> Result<Option<&str>, ParseError> {
    let Some(found) = KEYMAP_HEADER.find(src) else {
        return Ok(None);
    };

    // The match ends right after the opening brace.
    let open_idx = found.end() - 1;
    let (body, _) = find_brace_block(src, open_idx)?;
    Ok(Some(body))
}
