//! Layout planning: maps sections to slide specifications.
//!
//! Each section is classified once into a [`SectionKind`]; the planner then
//! dispatches on that kind. Thematic rules (introduction, case studies)
//! and pagination live here; rendering does not.

use crate::bullets::BulletExtractor;
use crate::clean::clean;
use crate::config::PlannerConfig;
use crate::slide::SlideSpec;
use crate::table::TableExtractor;
use crate::types::{Document, Section, Subsection, Table};

/// How a section is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Cover page or untitled section; represented by the title slide.
    Cover,
    /// Introduction; themed subsections are condensed into one slide.
    Introduction,
    /// Case studies with subsections; two subsections per slide.
    CaseStudies,
    /// Other sections with subsections; one slide per subsection.
    Grouped,
    /// No subsections; a table, paginated bullets or a text slide.
    Flat,
}

/// Introduction themes, in slide order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Theme {
    Mission,
    Product,
    Market,
}

impl Theme {
    /// All themes in the order they are checked and emitted.
    pub const ALL: [Theme; 3] = [Theme::Mission, Theme::Product, Theme::Market];
}

/// Turns a document into an ordered list of slides.
#[derive(Debug, Clone)]
pub struct LayoutPlanner {
    config: PlannerConfig,
    bullets: BulletExtractor,
    tables: TableExtractor,
}

impl Default for LayoutPlanner {
    fn default() -> Self {
        Self::new(PlannerConfig::default())
    }
}

impl LayoutPlanner {
    /// Create a planner with the given configuration.
    pub fn new(config: PlannerConfig) -> Self {
        Self {
            bullets: BulletExtractor::from_config(&config),
            tables: TableExtractor::new(),
            config,
        }
    }

    /// The configuration in use.
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Classify a section by its title and shape.
    ///
    /// The cover marker is checked before the introduction keyword, so a
    /// title containing both is treated as the cover.
    pub fn classify(&self, section: &Section) -> SectionKind {
        let keywords = &self.config.keywords;
        let title = section.title.as_str();

        if title.is_empty() || title.contains(keywords.cover_marker.as_str()) {
            SectionKind::Cover
        } else if title.contains(keywords.introduction.as_str()) {
            SectionKind::Introduction
        } else if !section.has_subsections() {
            SectionKind::Flat
        } else if title
            .to_lowercase()
            .contains(&keywords.case.to_lowercase())
        {
            SectionKind::CaseStudies
        } else {
            SectionKind::Grouped
        }
    }

    /// The first introduction theme whose keyword appears in `title`.
    pub fn theme_of(&self, title: &str) -> Option<Theme> {
        Theme::ALL
            .into_iter()
            .find(|theme| title.contains(self.theme_keyword(*theme)))
    }

    /// Plan the whole document.
    ///
    /// A non-empty document always starts with exactly one title slide;
    /// an empty document yields no slides.
    pub fn plan(&self, document: &Document) -> Vec<SlideSpec> {
        if document.is_empty() {
            return Vec::new();
        }

        let mut slides = vec![SlideSpec::title(
            clean(&self.config.deck_title),
            clean(&self.config.deck_subtitle),
        )];

        for section in &document.sections {
            let kind = self.classify(section);
            let before = slides.len();

            match kind {
                SectionKind::Cover => {}
                SectionKind::Introduction => self.plan_introduction(section, &mut slides),
                SectionKind::CaseStudies => self.plan_case_studies(section, &mut slides),
                SectionKind::Grouped => {
                    for subsection in &section.subsections {
                        self.plan_subsection(section, subsection, &mut slides);
                    }
                }
                SectionKind::Flat => self.plan_flat(section, &mut slides),
            }

            log::debug!(
                "Section '{}' ({:?}): {} slide(s)",
                section.title,
                kind,
                slides.len() - before
            );
        }

        slides
    }

    fn plan_introduction(&self, section: &Section, slides: &mut Vec<SlideSpec>) {
        // Each subsection counts for its first matching theme. The sort is
        // stable, so subsections sharing a theme keep document order.
        let mut themed: Vec<(Theme, &Subsection)> = section
            .subsections
            .iter()
            .filter_map(|subsection| Some((self.theme_of(&subsection.title)?, subsection)))
            .collect();
        themed.sort_by_key(|(theme, _)| *theme);

        if themed.is_empty() {
            let bullets = self.bullets.extract(&section.content);
            if !bullets.is_empty() {
                slides.push(self.bullet_slide(&section.title, bullets, self.config.limits.max_visible));
            }
            return;
        }

        let mut bullets = Vec::new();
        for (theme, subsection) in themed {
            bullets.push(heading_bullet(self.theme_icon(theme), &subsection.title));
            bullets.extend(
                self.bullets
                    .extract(&subsection.content)
                    .into_iter()
                    .take(self.theme_take(theme)),
            );
        }

        slides.push(self.bullet_slide(
            &self.config.keywords.introduction,
            bullets,
            self.config.limits.themed_max_visible,
        ));
    }

    fn plan_case_studies(&self, section: &Section, slides: &mut Vec<SlideSpec>) {
        let take = self.config.limits.case_bullets;
        let icon = &self.config.icons.case;

        for pair in section.subsections.chunks(2) {
            if let [first, second] = pair {
                let mut bullets = vec![heading_bullet(icon, &first.title)];
                bullets.extend(self.bullets.extract(&first.content).into_iter().take(take));
                bullets.push(String::new());
                bullets.push(heading_bullet(icon, &second.title));
                bullets.extend(self.bullets.extract(&second.content).into_iter().take(take));

                slides.push(self.bullet_slide(
                    &section.title,
                    bullets,
                    self.config.limits.themed_max_visible,
                ));
            } else {
                for subsection in pair {
                    self.plan_subsection(section, subsection, slides);
                }
            }
        }
    }

    /// One slide titled `Section: Subsection`, skipped when there are no bullets.
    fn plan_subsection(&self, section: &Section, subsection: &Subsection, slides: &mut Vec<SlideSpec>) {
        let bullets = self.bullets.extract(&subsection.content);
        if bullets.is_empty() {
            log::debug!("Subsection '{}' has no bullets", subsection.title);
            return;
        }

        let title = format!("{}: {}", section.title, subsection.title);
        slides.push(self.bullet_slide(&title, bullets, self.config.limits.max_visible));
    }

    fn plan_flat(&self, section: &Section, slides: &mut Vec<SlideSpec>) {
        let limits = &self.config.limits;

        if let Some(table) = self.tables.extract(&section.content) {
            slides.push(SlideSpec::table(
                clean(&section.title),
                clean_table(table),
                limits.table_rows,
                limits.table_columns,
            ));
            return;
        }

        let bullets = self.bullets.extract(&section.content);
        if !bullets.is_empty() {
            for (page, chunk) in bullets.chunks(limits.bullets_per_page.max(1)).enumerate() {
                let title = if page == 0 {
                    section.title.clone()
                } else {
                    format!("{}{}", section.title, self.config.continuation_suffix)
                };
                slides.push(self.bullet_slide(&title, chunk.to_vec(), limits.max_visible));
            }
            return;
        }

        if !section.content.is_empty() {
            let end = section.content.len().min(limits.text_lines);
            let text = clean(&section.content[..end].join("\n"));
            slides.push(SlideSpec::text(clean(&section.title), text));
        }
    }

    fn bullet_slide(&self, title: &str, bullets: Vec<String>, max_visible: usize) -> SlideSpec {
        SlideSpec::bullets(clean(title), bullets, max_visible, &self.config.omitted_template)
    }

    fn theme_keyword(&self, theme: Theme) -> &str {
        let keywords = &self.config.keywords;
        match theme {
            Theme::Mission => &keywords.mission,
            Theme::Product => &keywords.product,
            Theme::Market => &keywords.market,
        }
    }

    fn theme_icon(&self, theme: Theme) -> &str {
        let icons = &self.config.icons;
        match theme {
            Theme::Mission => &icons.mission,
            Theme::Product => &icons.product,
            Theme::Market => &icons.market,
        }
    }

    fn theme_take(&self, theme: Theme) -> usize {
        let limits = &self.config.limits;
        match theme {
            Theme::Mission => limits.mission_bullets,
            Theme::Product => limits.product_bullets,
            Theme::Market => limits.market_bullets,
        }
    }
}

fn heading_bullet(icon: &str, title: &str) -> String {
    let title = clean(title);
    if icon.is_empty() {
        title
    } else {
        format!("{icon} {title}")
    }
}

fn clean_table(table: Table) -> Table {
    Table::new(
        table
            .rows
            .into_iter()
            .map(|row| row.iter().map(|cell| clean(cell)).collect())
            .collect(),
    )
}
