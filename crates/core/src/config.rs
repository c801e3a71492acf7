//! Planner configuration.
//!
//! Every layout policy number and keyword lives here so the decision
//! logic carries no literals. Deserialization fills missing fields from
//! [`PlannerConfig::default`].

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Keywords matched against section and subsection titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keywords {
    /// Marks the cover section, which is skipped.
    pub cover_marker: String,
    /// Marks the introduction section.
    pub introduction: String,
    /// Introduction theme keywords.
    pub mission: String,
    pub product: String,
    pub market: String,
    /// Marks a case-study section (matched case-insensitively).
    pub case: String,
}

impl Default for Keywords {
    fn default() -> Self {
        Self {
            cover_marker: "Title Slide".to_string(),
            introduction: "Introduction".to_string(),
            mission: "Mission".to_string(),
            product: "Product".to_string(),
            market: "Market".to_string(),
            case: "case".to_string(),
        }
    }
}

/// Icons prefixed to themed headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icons {
    pub mission: String,
    pub product: String,
    pub market: String,
    pub case: String,
}

impl Default for Icons {
    fn default() -> Self {
        Self {
            mission: "🎯".to_string(),
            product: "💡".to_string(),
            market: "📊".to_string(),
            case: "📌".to_string(),
        }
    }
}

/// Size limits applied while building slides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Bullet cap for ordinary bullet slides.
    pub max_visible: usize,
    /// Bullet cap for the introduction and case-pair slides.
    pub themed_max_visible: usize,
    /// Page size when splitting a flat section into several slides.
    pub bullets_per_page: usize,
    pub table_rows: usize,
    pub table_columns: usize,
    /// Raw lines used for a text slide.
    pub text_lines: usize,
    /// Bullets taken from each mission, product and market subsection.
    pub mission_bullets: usize,
    pub product_bullets: usize,
    pub market_bullets: usize,
    /// Bullets taken from each subsection of a case pair.
    pub case_bullets: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_visible: 7,
            themed_max_visible: 10,
            bullets_per_page: 6,
            table_rows: 8,
            table_columns: 5,
            text_lines: 5,
            mission_bullets: 2,
            product_bullets: 5,
            market_bullets: 2,
            case_bullets: 3,
        }
    }
}

/// Full configuration for [`convert`](crate::convert).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Title of the opening slide.
    pub deck_title: String,
    /// Subtitle of the opening slide.
    pub deck_subtitle: String,

    pub keywords: Keywords,
    pub icons: Icons,
    pub limits: Limits,

    /// Whether adjacent thin sections are merged.
    pub merge_thin_sections: bool,
    /// Two sections merge when their combined line count is below this.
    pub thin_section_lines: usize,

    /// Prose lines must be longer than this many characters to count.
    pub min_prose_chars: usize,
    /// Prose lines starting with one of these are dropped.
    pub transcript_markers: Vec<String>,

    /// Appended to the titles of continuation pages.
    pub continuation_suffix: String,
    /// Summary bullet for capped slides; `{count}` is replaced.
    pub omitted_template: String,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            deck_title: "Presentation".to_string(),
            deck_subtitle: "Generated from Markdown".to_string(),
            keywords: Keywords::default(),
            icons: Icons::default(),
            limits: Limits::default(),
            merge_thin_sections: true,
            thin_section_lines: 10,
            min_prose_chars: 15,
            transcript_markers: vec!["User:".to_string(), "AI:".to_string()],
            continuation_suffix: " (continued)".to_string(),
            omitted_template: "… and {count} more".to_string(),
        }
    }
}

impl PlannerConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration document and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the opening slide's title.
    pub fn with_deck_title(mut self, title: impl Into<String>) -> Self {
        self.deck_title = title.into();
        self
    }

    /// Set the opening slide's subtitle.
    pub fn with_deck_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.deck_subtitle = subtitle.into();
        self
    }

    /// Enable or disable merging of thin sections.
    pub fn with_merge_thin_sections(mut self, merge: bool) -> Self {
        self.merge_thin_sections = merge;
        self
    }

    /// Set the default bullet cap.
    pub fn with_max_visible(mut self, max: usize) -> Self {
        self.limits.max_visible = max;
        self
    }

    /// Check that every cap is positive and every keyword non-empty.
    pub fn validate(&self) -> Result<()> {
        let limits = [
            ("max_visible", self.limits.max_visible),
            ("themed_max_visible", self.limits.themed_max_visible),
            ("bullets_per_page", self.limits.bullets_per_page),
            ("table_rows", self.limits.table_rows),
            ("table_columns", self.limits.table_columns),
            ("text_lines", self.limits.text_lines),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(Error::InvalidConfig(format!("{name} must be at least 1")));
            }
        }

        let keywords = [
            ("cover_marker", &self.keywords.cover_marker),
            ("introduction", &self.keywords.introduction),
            ("mission", &self.keywords.mission),
            ("product", &self.keywords.product),
            ("market", &self.keywords.market),
            ("case", &self.keywords.case),
        ];
        for (name, value) in keywords {
            if value.trim().is_empty() {
                return Err(Error::InvalidConfig(format!("keyword {name} is empty")));
            }
        }

        if !self.omitted_template.contains("{count}") {
            return Err(Error::InvalidConfig(
                "omitted_template must contain {count}".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(PlannerConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_limits() {
        let limits = Limits::default();
        assert_eq!(limits.max_visible, 7);
        assert_eq!(limits.themed_max_visible, 10);
        assert_eq!(limits.bullets_per_page, 6);
        assert_eq!((limits.table_rows, limits.table_columns), (8, 5));
    }

    #[test]
    fn test_from_json_partial() {
        let config = PlannerConfig::from_json(
            r#"{ "deck_title": "Quarterly Review", "limits": { "max_visible": 5 } }"#,
        )
        .unwrap();

        assert_eq!(config.deck_title, "Quarterly Review");
        assert_eq!(config.limits.max_visible, 5);
        assert_eq!(config.limits.themed_max_visible, 10);
        assert_eq!(config.keywords.introduction, "Introduction");
    }

    #[test]
    fn test_from_json_rejects_zero_cap() {
        let err = PlannerConfig::from_json(r#"{ "limits": { "table_rows": 0 } }"#).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_from_json_rejects_empty_keyword() {
        let err = PlannerConfig::from_json(r#"{ "keywords": { "case": " " } }"#).unwrap_err();
        assert!(err.to_string().contains("case"));
    }

    #[test]
    fn test_from_json_syntax_error() {
        let err = PlannerConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::ConfigParse(_)));
    }

    #[test]
    fn test_builders() {
        let config = PlannerConfig::new()
            .with_deck_title("Deck")
            .with_deck_subtitle("Sub")
            .with_merge_thin_sections(false)
            .with_max_visible(4);

        assert_eq!(config.deck_title, "Deck");
        assert_eq!(config.deck_subtitle, "Sub");
        assert!(!config.merge_thin_sections);
        assert_eq!(config.limits.max_visible, 4);
    }
}
