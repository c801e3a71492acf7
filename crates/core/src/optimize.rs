//! Merging of adjacent thin sections.

use crate::config::PlannerConfig;
use crate::types::Section;

/// Fuses neighbouring sections that would each make a sparse slide.
#[derive(Debug, Clone, Copy)]
pub struct SectionOptimizer {
    /// Two sections fuse when their combined content line count is below this.
    max_combined_lines: usize,
}

impl Default for SectionOptimizer {
    fn default() -> Self {
        Self {
            max_combined_lines: 10,
        }
    }
}

impl SectionOptimizer {
    /// Create an optimizer with the default threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an optimizer using the threshold in `config`.
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self {
            max_combined_lines: config.thin_section_lines,
        }
    }

    /// Whether `a` and its successor `b` should be fused.
    pub fn should_merge(&self, a: &Section, b: &Section) -> bool {
        a.content.len() + b.content.len() < self.max_combined_lines
            && !a.has_subsections()
            && !b.has_subsections()
    }

    /// Single left-to-right pass. A fused section is emitted immediately
    /// and never fused again, so at most two sections end up in one.
    pub fn optimize(&self, sections: Vec<Section>) -> Vec<Section> {
        let mut optimized = Vec::with_capacity(sections.len());
        let mut iter = sections.into_iter().peekable();

        while let Some(current) = iter.next() {
            match iter.next_if(|next| self.should_merge(&current, next)) {
                Some(next) => {
                    log::debug!("Merging sections '{}' and '{}'", current.title, next.title);
                    optimized.push(merge(current, next));
                }
                None => optimized.push(current),
            }
        }

        optimized
    }
}

fn merge(mut a: Section, b: Section) -> Section {
    a.title = format!("{} / {}", a.title, b.title);
    a.subsections.extend(b.subsections);
    a.content.extend(b.content);
    a
}
