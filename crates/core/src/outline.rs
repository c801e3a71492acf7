//! Plain-text outline output.
//!
//! Renders a slide plan as text for previews: one block per slide,
//! separated by a blank line.

use crate::slide::SlideSpec;

/// Formatter for plain-text slide outlines.
#[derive(Debug, Clone)]
pub struct OutlineFormatter {
    /// Prefix for bullet lines.
    bullet_prefix: String,
    /// Separator between table cells.
    cell_separator: String,
}

impl Default for OutlineFormatter {
    fn default() -> Self {
        Self {
            bullet_prefix: "- ".to_string(),
            cell_separator: " | ".to_string(),
        }
    }
}

impl OutlineFormatter {
    /// Create a new formatter with `- ` bullets and ` | ` cell separators.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom bullet prefix.
    pub fn with_bullet_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.bullet_prefix = prefix.into();
        self
    }

    /// Format slides into an outline.
    ///
    /// # Example output
    /// ```text
    /// [1] title: Presentation
    /// Generated from Markdown
    ///
    /// [2] bullets: Findings
    /// - Latency dropped by half
    /// - Costs are flat
    /// ```
    pub fn format(&self, slides: &[SlideSpec]) -> String {
        slides
            .iter()
            .enumerate()
            .map(|(idx, slide)| self.format_slide(idx + 1, slide))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Format and add a trailing newline.
    pub fn format_with_newline(&self, slides: &[SlideSpec]) -> String {
        let formatted = self.format(slides);
        if formatted.is_empty() {
            formatted
        } else {
            format!("{}\n", formatted)
        }
    }

    fn format_slide(&self, number: usize, slide: &SlideSpec) -> String {
        let mut lines = vec![format!("[{}] {}: {}", number, slide.kind(), slide.slide_title())];

        match slide {
            SlideSpec::Title(s) => {
                if !s.subtitle.is_empty() {
                    lines.push(s.subtitle.clone());
                }
            }
            SlideSpec::Bullets(s) => {
                // Empty separator bullets become blank-looking lines.
                lines.extend(s.bullets().iter().map(|b| {
                    if b.is_empty() {
                        String::new()
                    } else {
                        format!("{}{}", self.bullet_prefix, b)
                    }
                }));
            }
            SlideSpec::Table(s) => {
                lines.extend(s.rows.iter().map(|row| row.join(self.cell_separator.as_str())));
            }
            SlideSpec::Text(s) => {
                lines.extend(s.text.lines().map(str::to_string));
            }
        }

        lines.join("\n")
    }
}
