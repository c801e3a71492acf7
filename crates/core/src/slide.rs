//! Slide specifications: the planner's output, independent of rendering.

use crate::types::Table;
use serde::Serialize;

/// One planned slide.
///
/// Values are immutable once built; the constructors enforce the bullet
/// cap and table limits so a renderer can draw them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SlideSpec {
    /// Opening slide with the deck title.
    Title(TitleSlide),
    /// Title plus a bullet list.
    Bullets(BulletSlide),
    /// Title plus a table whose first row is the header.
    Table(TableSlide),
    /// Title plus a block of plain text.
    Text(TextSlide),
}

impl SlideSpec {
    /// Build a title slide.
    pub fn title(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self::Title(TitleSlide {
            title: title.into(),
            subtitle: subtitle.into(),
        })
    }

    /// Build a bullet slide, capping it at `max_visible` bullets.
    pub fn bullets(
        title: impl Into<String>,
        bullets: Vec<String>,
        max_visible: usize,
        omitted_template: &str,
    ) -> Self {
        Self::Bullets(BulletSlide::new(title, bullets, max_visible, omitted_template))
    }

    /// Build a table slide, truncating to `max_rows` x `max_cols`.
    pub fn table(title: impl Into<String>, table: Table, max_rows: usize, max_cols: usize) -> Self {
        Self::Table(TableSlide {
            title: title.into(),
            rows: table.truncated(max_rows, max_cols).rows,
        })
    }

    /// Build a plain-text slide.
    pub fn text(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Text(TextSlide {
            title: title.into(),
            text: text.into(),
        })
    }

    /// The slide's title.
    pub fn slide_title(&self) -> &str {
        match self {
            Self::Title(s) => &s.title,
            Self::Bullets(s) => &s.title,
            Self::Table(s) => &s.title,
            Self::Text(s) => &s.title,
        }
    }

    /// Short name of the slide kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Title(_) => "title",
            Self::Bullets(_) => "bullets",
            Self::Table(_) => "table",
            Self::Text(_) => "text",
        }
    }

    /// The bullet slide payload, if this is one.
    pub fn as_bullets(&self) -> Option<&BulletSlide> {
        match self {
            Self::Bullets(s) => Some(s),
            _ => None,
        }
    }

    /// The table slide payload, if this is one.
    pub fn as_table(&self) -> Option<&TableSlide> {
        match self {
            Self::Table(s) => Some(s),
            _ => None,
        }
    }
}

/// Opening slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleSlide {
    /// Deck title.
    pub title: String,
    /// Line shown under the title; may be empty.
    pub subtitle: String,
}

/// A bullet slide carrying at most `max_visible` bullets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulletSlide {
    title: String,
    bullets: Vec<String>,
    max_visible: usize,
}

impl BulletSlide {
    /// Build a bullet slide.
    ///
    /// When more than `max_visible` bullets are supplied, the first
    /// `max_visible - 1` are kept and a summary bullet rendered from
    /// `omitted_template` (`{count}` is replaced) takes the last place.
    pub fn new(
        title: impl Into<String>,
        mut bullets: Vec<String>,
        max_visible: usize,
        omitted_template: &str,
    ) -> Self {
        let max_visible = max_visible.max(1);

        if bullets.len() > max_visible {
            let keep = max_visible - 1;
            let omitted = bullets.len() - keep;
            bullets.truncate(keep);
            bullets.push(omitted_template.replace("{count}", &omitted.to_string()));
        }

        Self {
            title: title.into(),
            bullets,
            max_visible,
        }
    }

    /// Cleaned slide title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Bullets in display order, summary bullet included; `""` is a separator.
    pub fn bullets(&self) -> &[String] {
        &self.bullets
    }

    /// Cap the bullets were held to.
    pub fn max_visible(&self) -> usize {
        self.max_visible
    }
}

/// A table slide; row 0 is the header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSlide {
    /// Cleaned slide title.
    pub title: String,
    /// Truncated, cleaned cell rows.
    pub rows: Vec<Vec<String>>,
}

/// A slide with a block of cleaned prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextSlide {
    /// Cleaned slide title.
    pub title: String,
    /// Cleaned text, lines joined with `\n`.
    pub text: String,
}

/// A planned deck.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Deck {
    /// Number of sections the planner saw (after merging).
    pub section_count: usize,

    /// Slides in presentation order.
    pub slides: Vec<SlideSpec>,
}

impl Deck {
    /// Number of planned slides.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}
