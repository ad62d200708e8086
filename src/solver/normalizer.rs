//! Textual normalization of raw user input. No algebraic interpretation
//! happens here: the output is still a string, plus the integration variable
//! extracted from a trailing differential.

use crate::solver::error::CasError;
use regex::Regex;
use std::sync::LazyLock;

/// trailing differential: "<expr> d<letter>", whitespace allowed around the d
static DIFFERENTIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?<expr>.*?)\s*\bd\s*(?<var>[a-zA-Z])$")
        .unwrap_or_else(|e| panic!("invalid differential pattern: {}", e))
});

/// leading "integrate"/"integral" verbiage some users type out
static COMMAND_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(integrate|integral(\s+of)?)\s+")
        .unwrap_or_else(|e| panic!("invalid command prefix pattern: {}", e))
});

/// Produce `(expression_text, variable_name)` from raw user text.
///
/// Strips optional integral sign prefixes and an optional trailing `d<var>`
/// differential. Without a differential the variable defaults to `"x"`.
/// An input that is empty after stripping is an input shape error.
pub fn normalize_input(raw: &str) -> Result<(String, String), CasError> {
    let mut text = raw.trim();
    while let Some(rest) = text.strip_prefix('∫') {
        text = rest.trim_start();
    }
    let text = COMMAND_PREFIX.replace(text, "");
    let text = text.trim();

    let (expr, var) = match DIFFERENTIAL.captures(text) {
        Some(caps) => (
            caps["expr"].trim().to_string(),
            caps["var"].to_string(),
        ),
        None => (text.to_string(), "x".to_string()),
    };

    if expr.is_empty() {
        return Err(CasError::empty_input());
    }
    Ok((expr, var))
}
