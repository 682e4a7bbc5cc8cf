//! Chain badge widget.
//!
//! Displays a boxed chain name, colored by whether the chain is the source or
//! the destination of a transfer.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::domain::{ChainDescriptor, chain_name};
use crate::theme::{ACCENT_COLOR, SECONDARY_COLOR};

/// Which end of a transfer a badge stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeRole {
    Source,
    Destination,
}

// ============================================================================
// ChainBadge Widget
// ============================================================================

/// A boxed chain name.
///
/// ```text
/// ┌──────────┐
/// │ Ethereum │
/// └──────────┘
/// ```
#[derive(Debug, Clone)]
pub struct ChainBadge<'a> {
    chain: &'a ChainDescriptor,
    role: BadgeRole,
}

impl<'a> ChainBadge<'a> {
    #[must_use]
    pub const fn new(chain: &'a ChainDescriptor, role: BadgeRole) -> Self {
        Self { chain, role }
    }

    fn style(&self) -> Style {
        let color = match self.role {
            BadgeRole::Source => SECONDARY_COLOR,
            BadgeRole::Destination => ACCENT_COLOR,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    /// Width of the badge in cells, borders included.
    #[must_use]
    pub fn width(&self) -> usize {
        chain_name(self.chain).chars().count() + 4
    }

    /// The three lines of the boxed badge.
    #[must_use]
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        let content = format!(" {} ", chain_name(self.chain));
        let inner = content.chars().count();
        vec![
            Line::from(format!("┌{}┐", "─".repeat(inner))),
            Line::from(vec![
                Span::raw("│"),
                Span::styled(content, self.style()),
                Span::raw("│"),
            ]),
            Line::from(format!("└{}┘", "─".repeat(inner))),
        ]
    }
}

/// Source and destination badges side by side, joined by an arrow.
///
/// ```text
/// ┌──────────┐   ┌─────────┐
/// │ Ethereum │ → │ Polygon │
/// └──────────┘   └─────────┘
/// ```
#[must_use]
pub fn route_lines(from: &ChainDescriptor, to: &ChainDescriptor) -> Vec<Line<'static>> {
    let source = ChainBadge::new(from, BadgeRole::Source).to_lines();
    let destination = ChainBadge::new(to, BadgeRole::Destination).to_lines();

    source
        .into_iter()
        .zip(destination)
        .enumerate()
        .map(|(row, (left, right))| {
            let joint = if row == 1 { " → " } else { "   " };
            let mut spans = left.spans;
            spans.push(Span::raw(joint));
            spans.extend(right.spans);
            Line::from(spans)
        })
        .collect()
}

impl Widget for ChainBadge<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (i, line) in self.to_lines().into_iter().enumerate() {
            if i >= usize::from(area.height) {
                break;
            }
            let row = Rect::new(area.x, area.y + i as u16, area.width, 1);
            line.render(row, buf);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
