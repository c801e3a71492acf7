//! Inline markup removal.
//!
//! Strips fenced code, inline code, emphasis and link syntax from a string,
//! leaving the visible text.

use regex::Regex;
use std::sync::LazyLock;

/// Fenced code block, possibly spanning lines. Removed entirely.
static FENCED_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());

/// Inline code span.
static INLINE_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"`([^`]+)`").unwrap());

/// Bold delimiters.
static BOLD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.*?)\*\*").unwrap());

/// Italic delimiters.
static ITALIC_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*(.*?)\*").unwrap());

/// `[label](target)` links.
static LINK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());

/// Removes inline Markdown markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCleaner;

impl TextCleaner {
    /// Create a new text cleaner.
    pub fn new() -> Self {
        Self
    }

    /// Strip markup and surrounding whitespace.
    ///
    /// Passes repeat until the text stops changing, so
    /// `clean(clean(x)) == clean(x)` holds even when removing one span
    /// exposes another.
    pub fn clean(&self, text: &str) -> String {
        let mut current = clean_once(text);
        loop {
            let next = clean_once(&current);
            if next == current {
                return current;
            }
            current = next;
        }
    }
}

/// Convenience wrapper around [`TextCleaner::clean`].
pub fn clean(text: &str) -> String {
    TextCleaner.clean(text)
}

/// A single pass. Every substitution removes delimiters, so repeated
/// passes shrink the text until a fixed point.
fn clean_once(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let result = FENCED_CODE_REGEX.replace_all(text, "");
    let result = INLINE_CODE_REGEX.replace_all(&result, "$1");
    let result = BOLD_REGEX.replace_all(&result, "$1");
    let result = ITALIC_REGEX.replace_all(&result, "$1");
    let result = LINK_REGEX.replace_all(&result, "$1");

    result.trim().to_string()
}
