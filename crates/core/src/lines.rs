//! Line-level syntax predicates shared by the parser and the extractors.

use regex::Regex;
use std::sync::LazyLock;

/// Three or more `-`, `*` or `_` (optionally space separated) and nothing else.
static HORIZONTAL_RULE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:-[ \t]*){3,}|(?:\*[ \t]*){3,}|(?:_[ \t]*){3,})$").unwrap()
});

/// Opening or closing marker of a fenced code block.
pub const CODE_FENCE: &str = "```";

/// Cell delimiter in table rows.
pub const TABLE_DELIMITER: char = '|';

/// Whether the line is a horizontal rule such as `---` or `* * *`.
pub fn is_horizontal_rule(line: &str) -> bool {
    HORIZONTAL_RULE_REGEX.is_match(line.trim())
}

/// Whether the line opens or closes a fenced code block.
pub fn is_code_fence(line: &str) -> bool {
    line.trim_start().starts_with(CODE_FENCE)
}

/// Whether the line contains a table cell delimiter.
pub fn has_table_delimiter(line: &str) -> bool {
    line.contains(TABLE_DELIMITER)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_rules() {
        assert!(is_horizontal_rule("---"));
        assert!(is_horizontal_rule("  -----  "));
        assert!(is_horizontal_rule("* * *"));
        assert!(is_horizontal_rule("___"));
    }

    #[test]
    fn test_not_horizontal_rules() {
        assert!(!is_horizontal_rule("--"));
        assert!(!is_horizontal_rule("- item"));
        assert!(!is_horizontal_rule("-*-"));
        assert!(!is_horizontal_rule("|---|---|"));
    }

    #[test]
    fn test_code_fence() {
        assert!(is_code_fence("```"));
        assert!(is_code_fence("  ```rust"));
        assert!(!is_code_fence("`inline`"));
    }
}
