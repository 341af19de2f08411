//! Comment removal for device-tree style sources.

use regex::Regex;
use std::sync::LazyLock;

static BLOCK_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("block comment pattern is valid"));

static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//[^\n]*").expect("line comment pattern is valid"));

/// Removes `/* ... */` and `// ...` comments.
///
/// Each comment is replaced by a single space so that tokens on either side
/// stay separated. Block comments are removed first, so a `//` inside a block
/// comment never swallows the rest of its line. Newlines that end a line
/// comment are kept.
pub fn strip_comments(text: &str) -> String {
    let without_blocks = BLOCK_COMMENT.replace_all(text, " ");
    LINE_COMMENT.replace_all(&without_blocks, " ").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_comments_is_unchanged() {
        let text = "keymap {\n    base { };\n};\n";
        assert_eq!(strip_comments(text), text);
    }

    #[test]
    fn test_block_comment_spanning_lines() {
        let text = "&kp A/* one\n two */&kp B";
        assert_eq!(strip_comments(text), "&kp A &kp B");
    }

    #[test]
    fn test_line_comment_keeps_newline() {
        let text = "&kp A // left pinky\n&kp B";
        assert_eq!(strip_comments(text), "&kp A  \n&kp B");
    }

    #[test]
    fn test_line_comment_inside_block_comment() {
        let text = "/* see // here */ &kp C";
        assert_eq!(strip_comments(text), "  &kp C");
    }

    #[test]
    fn test_multiple_block_comments_are_not_greedy() {
        let text = "/* a */ &kp A /* b */";
        assert_eq!(strip_comments(text), "  &kp A  ");
    }
}
