//! Domain types for representing a parsed Markdown outline.

use serde::{Deserialize, Serialize};

/// A parsed document: the titled sections in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Sections in document order. Every section has a non-empty title.
    pub sections: Vec<Section>,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from already-built sections.
    pub fn from_sections(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Add a section to the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Titles of all sections, in order.
    pub fn titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }
}

/// A top-level unit opened by a `##` heading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Heading text with enumeration decorations stripped.
    pub title: String,

    /// Subsections opened by `###` headings, in order.
    pub subsections: Vec<Subsection>,

    /// Raw (untrimmed) content lines that precede the first subsection.
    pub content: Vec<String>,
}

impl Section {
    /// Create a new section with the given title and no content.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subsections: Vec::new(),
            content: Vec::new(),
        }
    }

    /// Builder-style helper to attach content lines.
    pub fn with_content<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Builder-style helper to attach a subsection.
    pub fn with_subsection(mut self, subsection: Subsection) -> Self {
        self.subsections.push(subsection);
        self
    }

    /// Append a raw content line.
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.content.push(line.into());
    }

    /// Append a subsection.
    pub fn add_subsection(&mut self, subsection: Subsection) {
        self.subsections.push(subsection);
    }

    /// Whether this section owns any subsections.
    pub fn has_subsections(&self) -> bool {
        !self.subsections.is_empty()
    }
}

/// A nested unit opened by a `###` heading, owned by one section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsection {
    /// Heading text.
    pub title: String,

    /// Raw (untrimmed) content lines.
    pub content: Vec<String>,
}

impl Subsection {
    /// Create a new subsection with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: Vec::new(),
        }
    }

    /// Builder-style helper to attach content lines.
    pub fn with_content<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Append a raw content line.
    pub fn add_line(&mut self, line: impl Into<String>) {
        self.content.push(line.into());
    }
}

/// A rectangular-ish grid of cells extracted from pipe-delimited rows.
///
/// Row 0 is the header. Rows may have differing lengths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in source order.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from rows.
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    /// The header row, if any.
    pub fn header(&self) -> Option<&[String]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Number of rows including the header.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Keep at most `max_rows` rows and `max_cols` cells per row.
    pub fn truncated(mut self, max_rows: usize, max_cols: usize) -> Self {
        self.rows.truncate(max_rows);
        for row in &mut self.rows {
            row.truncate(max_cols);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_titles() {
        let mut doc = Document::new();
        assert!(doc.is_empty());

        doc.add_section(Section::new("Overview"));
        doc.add_section(Section::new("Results"));

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.titles(), vec!["Overview", "Results"]);
    }

    #[test]
    fn test_section_builders() {
        let section = Section::new("Plan")
            .with_content(["- one", "- two"])
            .with_subsection(Subsection::new("Phase 1").with_content(["- build"]));

        assert_eq!(section.content, vec!["- one", "- two"]);
        assert!(section.has_subsections());
        assert_eq!(section.subsections[0].content, vec!["- build"]);
    }

    #[test]
    fn test_table_dimensions() {
        let table = Table::new(vec![
            vec!["a".into(), "b".into(), "c".into()],
            vec!["1".into()],
        ]);

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 3);
        assert_eq!(table.header().map(<[String]>::len), Some(3));
    }

    #[test]
    fn test_table_truncated() {
        let rows = (0..9)
            .map(|r| (0..6).map(|c| format!("{r}:{c}")).collect())
            .collect();
        let table = Table::new(rows).truncated(8, 5);

        assert_eq!(table.row_count(), 8);
        assert!(table.rows.iter().all(|r| r.len() == 5));
        assert_eq!(table.rows[7][4], "7:4");
    }
}
