//! Tokenizer for the raw text of a `bindings` property.

use crate::constants::SIGIL;
use crate::models::Binding;
use crate::parser::comments::strip_comments;

/// Splits raw bindings text into whitespace-separated tokens.
///
/// Comments are removed, newlines and tabs become spaces and angle brackets
/// are dropped, so `<&kp A>, <&kp B>` tokenizes the same as `&kp A &kp B`.
fn tokenize(raw: &str) -> Vec<String> {
    let cleaned = strip_comments(raw).replace(['\n', '\r', '\t', '<', '>'], " ");

    cleaned
        .split(' ')
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Groups tokens into bindings: a sigil token opens a new binding and every
/// following plain token becomes one of its parameters.
///
/// Tokens before the first sigil token belong to no binding and are dropped.
pub fn group_bindings(tokens: &[String]) -> Vec<Binding> {
    let mut bindings: Vec<Binding> = Vec::new();

    for token in tokens {
        if token.starts_with(SIGIL) {
            bindings.push(Binding::new(token.as_str()));
        } else if let Some(current) = bindings.last_mut() {
            current.push_param(token.as_str());
        }
    }

    bindings
}

/// Parses raw bindings text into display codes, one per binding.
///
/// # Example
///
/// ```
/// use keymap_readme::parser::parse_bindings;
///
/// assert_eq!(parse_bindings(" &kp A &mo 1 &trans "), vec!["A", "MO(1)", "TRNS"]);
/// ```
pub fn parse_bindings(raw: &str) -> Vec<String> {
    group_bindings(&tokenize(raw))
        .iter()
        .map(Binding::display_code)
        .collect()
}
