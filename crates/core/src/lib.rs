//! Markdown outline parsing and slide layout planning.
//!
//! The pipeline is `text -> OutlineParser -> SectionOptimizer ->
//! LayoutPlanner -> Vec<SlideSpec>`. Rendering the slides is left to the
//! caller.

pub mod bullets;
pub mod clean;
pub mod config;
pub mod error;
pub mod lines;
pub mod optimize;
pub mod outline;
pub mod parser;
pub mod planner;
pub mod slide;
pub mod table;
pub mod types;

pub use bullets::BulletExtractor;
pub use clean::TextCleaner;
pub use config::PlannerConfig;
pub use error::{Error, Result};
pub use optimize::SectionOptimizer;
pub use outline::OutlineFormatter;
pub use parser::OutlineParser;
pub use planner::{LayoutPlanner, SectionKind, Theme};
pub use slide::{BulletSlide, Deck, SlideSpec, TableSlide, TextSlide, TitleSlide};
pub use table::TableExtractor;
pub use types::{Document, Section, Subsection, Table};

/// Run the full pipeline over `text`.
pub fn convert(text: &str, config: &PlannerConfig) -> Deck {
    let mut document = OutlineParser::new().parse(text);

    if config.merge_thin_sections {
        let optimizer = SectionOptimizer::from_config(config);
        document = Document::from_sections(optimizer.optimize(document.sections));
    }

    let planner = LayoutPlanner::new(config.clone());
    let slides = planner.plan(&document);

    log::debug!(
        "Planned {} slide(s) from {} section(s)",
        slides.len(),
        document.len()
    );

    Deck {
        section_count: document.len(),
        slides,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
## Title Slide
Welcome to the quarterly review deck

## Introduction
### Our Mission
- Make reporting effortless
- Ship weekly
- Stay small
### Product
1. Dashboards
2. Alerts

## Use Cases
### Finance
- Month-end close in hours
### Operations
- Fewer pager alerts overnight

## Metrics
| Metric | Q1 | Q2 |
|--------|----|----|
| Uptime | 99.9 | 99.95 |

## Next Steps
- Hire two engineers
- Launch the mobile app
";

    #[test]
    fn test_convert_sample_deck() {
        let config = PlannerConfig::default().with_merge_thin_sections(false);
        let deck = convert(SAMPLE, &config);

        assert_eq!(deck.section_count, 5);
        let kinds: Vec<_> = deck.slides.iter().map(SlideSpec::kind).collect();
        assert_eq!(kinds, vec!["title", "bullets", "bullets", "table", "bullets"]);

        let titles: Vec<_> = deck.slides.iter().map(SlideSpec::slide_title).collect();
        assert_eq!(
            titles,
            vec!["Presentation", "Introduction", "Use Cases", "Metrics", "Next Steps"]
        );
    }

    #[test]
    fn test_convert_merges_thin_sections() {
        let deck = convert(SAMPLE, &PlannerConfig::default());

        // "Metrics" (3 lines) and "Next Steps" (2 lines) fuse; the table wins.
        assert_eq!(deck.section_count, 4);
        let last = deck.slides.last().unwrap();
        assert_eq!(last.slide_title(), "Metrics / Next Steps");
        assert_eq!(last.kind(), "table");
    }

    #[test]
    fn test_convert_fuses_adjacent_thin_sections() {
        let text = "## A\n- a1\n- a2\n- a3\n## B\n- b1\n- b2\n- b3\n";
        let deck = convert(text, &PlannerConfig::default());

        assert_eq!(deck.section_count, 1);
        let slide = deck.slides[1].as_bullets().unwrap();
        assert_eq!(slide.title(), "A / B");
        assert_eq!(slide.bullets().len(), 6);
    }

    #[test]
    fn test_convert_empty() {
        let deck = convert("", &PlannerConfig::default());
        assert_eq!(deck.section_count, 0);
        assert_eq!(deck.slide_count(), 0);
    }

    #[test]
    fn test_convert_is_deterministic() {
        let config = PlannerConfig::default();
        assert_eq!(convert(SAMPLE, &config), convert(SAMPLE, &config));
    }
}
