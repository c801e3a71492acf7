//! Turns raw content lines into display bullets.

use crate::clean::clean;
use crate::config::PlannerConfig;
use crate::lines::{has_table_delimiter, is_code_fence, is_horizontal_rule};
use regex::Regex;
use std::sync::LazyLock;

/// `-`, `*` or `+` followed by whitespace.
static UNORDERED_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[-*+]\s+").unwrap());

/// `1.` followed by whitespace.
static ORDERED_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+").unwrap());

/// A bold label ending in a colon: `**Label:**` or `**Label**:`.
static BOLD_LABEL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*.*?(?::\*\*|\*\*:)").unwrap());

/// Extracts bullets from a block of content lines.
#[derive(Debug, Clone)]
pub struct BulletExtractor {
    /// Prose lines must be longer than this (in characters).
    min_prose_chars: usize,
    /// Prose lines starting with any of these are dropped.
    transcript_markers: Vec<String>,
}

impl Default for BulletExtractor {
    fn default() -> Self {
        Self::from_config(&PlannerConfig::default())
    }
}

impl BulletExtractor {
    /// Create an extractor with default heuristics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor using the heuristics in `config`.
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self {
            min_prose_chars: config.min_prose_chars,
            transcript_markers: config.transcript_markers.clone(),
        }
    }

    /// Set the prose length threshold.
    pub fn with_min_prose_chars(mut self, chars: usize) -> Self {
        self.min_prose_chars = chars;
        self
    }

    /// Extract bullets in source order.
    ///
    /// List items and bold labels are always kept (unless empty after
    /// cleaning). Other prose is kept only when it is long enough, is not
    /// a table row and does not look like a transcript turn. Everything
    /// inside a fenced code block, fences included, is skipped.
    pub fn extract<S: AsRef<str>>(&self, lines: &[S]) -> Vec<String> {
        let mut bullets = Vec::new();
        let mut in_fence = false;

        for line in lines {
            let line = line.as_ref().trim();

            if is_code_fence(line) {
                in_fence = !in_fence;
                continue;
            }
            if in_fence || line.is_empty() || is_horizontal_rule(line) {
                continue;
            }

            if let Some(m) = UNORDERED_MARKER_REGEX
                .find(line)
                .or_else(|| ORDERED_MARKER_REGEX.find(line))
            {
                push_non_empty(&mut bullets, clean(&line[m.end()..]));
            } else if BOLD_LABEL_REGEX.is_match(line) {
                push_non_empty(&mut bullets, clean(line));
            } else if !has_table_delimiter(line) {
                let cleaned = clean(line);
                if self.is_meaningful_prose(&cleaned) {
                    bullets.push(cleaned);
                }
            }
        }

        bullets
    }

    fn is_meaningful_prose(&self, cleaned: &str) -> bool {
        cleaned.chars().count() > self.min_prose_chars
            && !self
                .transcript_markers
                .iter()
                .any(|marker| cleaned.starts_with(marker.as_str()))
    }
}

fn push_non_empty(bullets: &mut Vec<String>, bullet: String) {
    if !bullet.is_empty() {
        bullets.push(bullet);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(lines: &[&str]) -> Vec<String> {
        BulletExtractor::new().extract(lines)
    }

    #[test]
    fn test_unordered_markers() {
        assert_eq!(
            extract(&["- dash", "* star", "+ plus"]),
            vec!["dash", "star", "plus"]
        );
    }

    #[test]
    fn test_ordered_markers() {
        assert_eq!(extract(&["1. first", "12. twelfth"]), vec!["first", "twelfth"]);
    }

    #[test]
    fn test_list_items_are_cleaned() {
        assert_eq!(
            extract(&["- **Fast** [builds](https://ci.example)"]),
            vec!["Fast builds"]
        );
    }

    #[test]
    fn test_empty_list_items_dropped() {
        assert!(extract(&["- ``` ```", "-   "]).is_empty());
    }

    #[test]
    fn test_bold_label_kept_regardless_of_length() {
        assert_eq!(extract(&["**Goal:**"]), vec!["Goal:"]);
        assert_eq!(extract(&["**Goal**: ship"]), vec!["Goal: ship"]);
    }

    #[test]
    fn test_short_prose_dropped() {
        assert!(extract(&["Too short here"]).is_empty());
        assert!(extract(&["fifteen chars!!"]).is_empty());
    }

    #[test]
    fn test_long_prose_kept() {
        assert_eq!(
            extract(&["This sentence is long enough."]),
            vec!["This sentence is long enough."]
        );
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 10 Cyrillic letters: 20 bytes but only 10 characters.
        assert!(extract(&["абвгдежзий"]).is_empty());
    }

    #[test]
    fn test_transcript_lines_dropped() {
        assert!(extract(&["User: how do I reset my password?"]).is_empty());
        assert!(extract(&["AI: open the settings page first"]).is_empty());
    }

    #[test]
    fn test_table_rows_skipped() {
        assert!(extract(&["| Name | Value |", "|------|-------|"]).is_empty());
    }

    #[test]
    fn test_code_fence_suppressed() {
        let lines = [
            "- before",
            "```rust",
            "- not a bullet inside code",
            "fn main() { println!(\"long enough line\"); }",
            "```",
            "- after",
        ];
        assert_eq!(extract(&lines), vec!["before", "after"]);
    }

    #[test]
    fn test_blank_and_rule_lines_skipped() {
        assert_eq!(extract(&["", "   ", "---", "- kept"]), vec!["kept"]);
    }

    #[test]
    fn test_duplicates_preserved_in_order() {
        assert_eq!(extract(&["- b", "- a", "- b"]), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_custom_threshold() {
        let extractor = BulletExtractor::new().with_min_prose_chars(3);
        assert_eq!(extractor.extract(&["four"]), vec!["four"]);
    }

    #[test]
    fn test_prose_bullets_exceed_threshold() {
        let lines = [
            "short",
            "A somewhat longer line of prose",
            "tiny prose line",
            "- x",
            "**Label:** y",
        ];
        let bullets = extract(&lines);

        assert_eq!(bullets, vec!["A somewhat longer line of prose", "x", "Label: y"]);
    }
}
