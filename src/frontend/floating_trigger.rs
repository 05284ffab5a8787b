//! The button that opens the assistant, ringed by the page's scroll progress
use std::f64::consts::PI;

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType};

use crate::scroll_tracker::ScrollState;

/// Radius of the progress ring the stroke offset is expressed in
pub const RING_RADIUS: f64 = 26.0;

pub const TRIGGER_WIDTH: u16 = 10;
pub const TRIGGER_HEIGHT: u16 = 3;

const RING_TRACK: Style = Style::new().fg(Color::DarkGray);
const RING_PROGRESS: Style = Style::new().fg(Color::Rgb(139, 92, 246));
const LABEL: Style = Style::new()
    .fg(Color::Rgb(167, 139, 250))
    .add_modifier(Modifier::BOLD);

#[must_use]
pub fn circumference() -> f64 {
    2.0 * PI * RING_RADIUS
}

/// The part of the ring left undrawn for `progress` (0..=100)
#[must_use]
pub fn stroke_dash_offset(progress: f64) -> f64 {
    let circumference = circumference();
    circumference - (progress / 100.0) * circumference
}

/// How many of `total` ring cells are drawn for `progress`
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn lit_cells(progress: f64, total: usize) -> usize {
    let circumference = circumference();
    let drawn = (circumference - stroke_dash_offset(progress)) / circumference;

    ((drawn * total as f64).round().max(0.0) as usize).min(total)
}

/// Bottom right corner of `area`, one column in from the edge
#[must_use]
pub fn trigger_area(area: Rect) -> Rect {
    let width = TRIGGER_WIDTH.min(area.width);
    let height = TRIGGER_HEIGHT.min(area.height);

    Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + area.height.saturating_sub(height),
        width,
        height,
    )
}

#[derive(Debug, Clone, Copy)]
pub struct FloatingTrigger {
    progress: f64,
}

impl FloatingTrigger {
    #[must_use]
    pub fn new(state: &ScrollState) -> Self {
        Self {
            progress: state.progress,
        }
    }
}

impl Widget for FloatingTrigger {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(RING_TRACK);
        let inner = block.inner(area);
        block.render(area, buf);

        Line::styled("AI", LABEL).centered().render(inner, buf);

        let ring = ring_cells(area);
        for &position in ring.iter().take(lit_cells(self.progress, ring.len())) {
            if let Some(cell) = buf.cell_mut(position) {
                cell.set_style(RING_PROGRESS);
            }
        }
    }
}

/// Border cells of `area`, clockwise starting at the top center
fn ring_cells(area: Rect) -> Vec<(u16, u16)> {
    if area.width < 2 || area.height < 2 {
        return Vec::new();
    }

    let (left, right) = (area.left(), area.right() - 1);
    let (top, bottom) = (area.top(), area.bottom() - 1);
    let center = left + area.width / 2;

    let mut cells = Vec::with_capacity(usize::from(area.width + area.height) * 2);
    cells.extend((center..=right).map(|x| (x, top)));
    cells.extend((top + 1..=bottom).map(|y| (right, y)));
    cells.extend((left..right).rev().map(|x| (x, bottom)));
    cells.extend((top..bottom).rev().map(|y| (left, y)));
    cells.extend((left + 1..center).map(|x| (x, top)));
    cells
}
