//! The scrollable host page the assistant floats over
use ratatui::prelude::*;

use crate::{catalog::ContentCatalog, scroll_tracker::ScrollMetrics};

const HEADING: Style = Style::new()
    .fg(Color::Rgb(139, 92, 246))
    .add_modifier(Modifier::BOLD);

#[derive(Debug, Clone, Default)]
pub struct PortfolioPage {
    title: String,
    lines: Vec<Line<'static>>,
    scroll_top: usize,
    viewport_height: usize,
}

impl PortfolioPage {
    pub fn from_catalog(catalog: &ContentCatalog) -> Self {
        let title = catalog
            .owner
            .as_ref()
            .map_or_else(|| "Portfolio".to_string(), |owner| format!("{owner} · Portfolio"));

        let mut lines = Vec::new();
        section(
            &mut lines,
            "Projects",
            catalog
                .projects
                .iter()
                .map(|project| format!("• {}", project.title)),
        );
        section(
            &mut lines,
            "Skills",
            catalog.skills.iter().map(|group| {
                let names = group
                    .skills
                    .iter()
                    .map(|skill| skill.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}: {names}", group.title)
            }),
        );
        section(
            &mut lines,
            "Experience",
            catalog
                .experience
                .iter()
                .map(|entry| format!("{} at {}", entry.role, entry.company)),
        );
        section(
            &mut lines,
            "Education",
            catalog
                .education
                .iter()
                .map(|entry| format!("{}, {}", entry.degree, entry.school)),
        );

        Self {
            title,
            lines,
            scroll_top: 0,
            viewport_height: 0,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    pub fn content_height(&self) -> usize {
        self.lines.len()
    }

    /// Records the rendered height, called on every draw
    ///
    /// Returns the new metrics if the resize moved the scroll position.
    pub fn set_viewport_height(&mut self, viewport_height: usize) -> Option<ScrollMetrics> {
        self.viewport_height = viewport_height;
        self.scroll_to(self.scroll_top)
    }

    #[allow(clippy::cast_precision_loss)]
    fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics {
            scroll_top: self.scroll_top as f64,
            content_height: self.content_height() as f64,
            viewport_height: self.viewport_height as f64,
        }
    }

    pub fn page_size(&self) -> usize {
        self.viewport_height.max(1)
    }

    /// Scrolls by `delta` rows
    ///
    /// Returns the new metrics, or `None` if the position did not change.
    pub fn scroll_by(&mut self, delta: isize) -> Option<ScrollMetrics> {
        self.scroll_to(self.scroll_top.saturating_add_signed(delta))
    }

    fn scroll_to(&mut self, scroll_top: usize) -> Option<ScrollMetrics> {
        let scroll_top = scroll_top.min(self.max_scroll_top());
        if scroll_top == self.scroll_top {
            return None;
        }

        self.scroll_top = scroll_top;
        Some(self.metrics())
    }

    fn max_scroll_top(&self) -> usize {
        self.content_height().saturating_sub(self.viewport_height)
    }
}

fn section(lines: &mut Vec<Line<'static>>, heading: &str, entries: impl Iterator<Item = String>) {
    if !lines.is_empty() {
        lines.push(Line::default());
    }
    lines.push(Line::styled(heading.to_string(), HEADING));
    lines.push(Line::default());
    lines.extend(entries.map(|entry| Line::from(format!("  {entry}"))));
}
