//! Quit confirmation popup.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
};

use crate::ui::helpers::{create_popup_block, key_hints};
use crate::ui::layout::centered_popup_area;

const POPUP_WIDTH: u16 = 50;
const POPUP_HEIGHT: u16 = 7;

/// Renders the centered "close tokenbridge?" prompt with y/n hints.
pub fn render(frame: &mut Frame, area: Rect) {
    let popup_area = centered_popup_area(area, POPUP_WIDTH, POPUP_HEIGHT);
    let popup_block = create_popup_block("Confirm Quit");
    let inner_area = popup_block.inner(popup_area);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block, popup_area);

    if inner_area.height < 3 {
        return;
    }

    let message_area = Rect::new(inner_area.x, inner_area.y + 1, inner_area.width, 1);
    frame.render_widget(
        Paragraph::new("Are you sure you want to close tokenbridge?").alignment(Alignment::Center),
        message_area,
    );

    let separator_area = Rect::new(inner_area.x, inner_area.bottom() - 2, inner_area.width, 1);
    frame.render_widget(
        Paragraph::new("─".repeat(usize::from(inner_area.width)))
            .style(Style::default().fg(Color::DarkGray)),
        separator_area,
    );

    let help_area = Rect::new(inner_area.x, inner_area.bottom() - 1, inner_area.width, 1);
    frame.render_widget(
        Paragraph::new(key_hints(&[("y", "Yes"), ("n/Esc", "No")])).alignment(Alignment::Center),
        help_area,
    );
}
