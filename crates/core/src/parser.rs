//! Markdown outline parser.
//!
//! Scans a document line by line into sections (`##`) and subsections
//! (`###`). The scan is a fold over an explicit [`ScanState`]; an open
//! subsection can only be closed into the section that holds it, and that
//! section is only closed into the document afterwards.

use crate::lines::is_horizontal_rule;
use crate::types::{Document, Section, Subsection};
use regex::Regex;
use std::sync::LazyLock;

/// Keycap ordinals (`1️⃣`, `#️⃣`, `🔟`) and whitespace at the start of a title.
static KEYCAP_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?:[0-9#*]\x{FE0F}?\x{20E3}|\x{1F51F}|\s)+").unwrap());

/// `3. ` or `3 ` style enumeration prefix.
static NUMBER_PREFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+(?:\.\s*|\s+)").unwrap());

/// What a raw line means to the scanner.
#[derive(Debug, PartialEq, Eq)]
enum LineKind<'a> {
    SectionHeading(String),
    SubsectionHeading(&'a str),
    Content(&'a str),
    Ignored,
}

impl<'a> LineKind<'a> {
    fn of(line: &'a str) -> Self {
        if line.starts_with("###") {
            Self::SubsectionHeading(line.trim_start_matches('#').trim())
        } else if line.starts_with("##") {
            Self::SectionHeading(section_title(line))
        } else if line.trim().is_empty() || is_horizontal_rule(line) {
            Self::Ignored
        } else {
            Self::Content(line)
        }
    }
}

/// Strip heading markers and enumeration decorations from a `##` line.
fn section_title(line: &str) -> String {
    let title = line.trim_start_matches('#').trim();
    let title = KEYCAP_PREFIX_REGEX.replace(title, "");
    let title = NUMBER_PREFIX_REGEX.replace(&title, "");
    title.trim().to_string()
}

/// Scanner state. Each variant owns the partially built pieces.
#[derive(Debug)]
enum ScanState {
    /// Before the first `##` heading. Lines here belong to no section; a
    /// `###` heading here opens an orphan subsection that is later dropped.
    BeforeSection {
        preamble_lines: usize,
        orphan: Option<Subsection>,
    },
    /// Inside a section with no open subsection.
    InSection(Section),
    /// Inside a subsection of the given section.
    InSubsection(Section, Subsection),
}

impl ScanState {
    fn start() -> Self {
        Self::BeforeSection {
            preamble_lines: 0,
            orphan: None,
        }
    }

    /// Consume one line and return the next state.
    fn step(self, line: &str, document: &mut Document) -> Self {
        match LineKind::of(line) {
            LineKind::SectionHeading(title) => {
                self.close(document);
                Self::InSection(Section::new(title))
            }
            LineKind::SubsectionHeading(title) => self.open_subsection(Subsection::new(title)),
            LineKind::Content(line) => self.push_line(line),
            LineKind::Ignored => self,
        }
    }

    fn open_subsection(self, subsection: Subsection) -> Self {
        match self {
            Self::BeforeSection {
                preamble_lines,
                orphan,
            } => {
                if let Some(dropped) = orphan {
                    warn_orphan(&dropped);
                }
                Self::BeforeSection {
                    preamble_lines,
                    orphan: Some(subsection),
                }
            }
            Self::InSection(section) => Self::InSubsection(section, subsection),
            Self::InSubsection(mut section, previous) => {
                section.add_subsection(previous);
                Self::InSubsection(section, subsection)
            }
        }
    }

    fn push_line(mut self, line: &str) -> Self {
        match &mut self {
            Self::BeforeSection {
                orphan: Some(subsection),
                ..
            } => subsection.add_line(line),
            Self::BeforeSection { preamble_lines, .. } => *preamble_lines += 1,
            Self::InSection(section) => section.add_line(line),
            Self::InSubsection(_, subsection) => subsection.add_line(line),
        }
        self
    }

    /// Flush the open subsection into its section, then the section into
    /// the document if it has a title.
    fn close(self, document: &mut Document) {
        let section = match self {
            Self::BeforeSection {
                preamble_lines,
                orphan,
            } => {
                if preamble_lines > 0 {
                    log::debug!("Skipping {} line(s) before the first section", preamble_lines);
                }
                if let Some(dropped) = orphan {
                    warn_orphan(&dropped);
                }
                return;
            }
            Self::InSection(section) => section,
            Self::InSubsection(mut section, subsection) => {
                section.add_subsection(subsection);
                section
            }
        };

        if section.title.is_empty() {
            if !section.content.is_empty() || section.has_subsections() {
                log::warn!(
                    "Dropping untitled section with {} line(s) and {} subsection(s)",
                    section.content.len(),
                    section.subsections.len()
                );
            }
            return;
        }

        document.add_section(section);
    }
}

fn warn_orphan(subsection: &Subsection) {
    log::warn!(
        "Dropping subsection '{}' ({} line(s)) declared before any section",
        subsection.title,
        subsection.content.len()
    );
}

/// Parser for heading-structured Markdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutlineParser;

impl OutlineParser {
    /// Create a new parser.
    pub fn new() -> Self {
        Self
    }

    /// Parse `text` into a document of titled sections.
    pub fn parse(&self, text: &str) -> Document {
        let mut document = Document::new();

        let state = text
            .lines()
            .fold(ScanState::start(), |state, line| state.step(line, &mut document));
        state.close(&mut document);

        log::debug!("Parsed {} section(s)", document.len());
        document
    }
}

/// Convenience wrapper around [`OutlineParser::parse`].
pub fn parse(text: &str) -> Document {
    OutlineParser.parse(text)
}
