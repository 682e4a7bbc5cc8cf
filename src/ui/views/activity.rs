//! Activity route: submitted transfers, newest first.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::domain::TransferReceipt;
use crate::state::{App, Route};
use crate::theme::{AMOUNT_STYLE, LABEL_STYLE, MUTED_COLOR, PRIMARY_COLOR, SELECTED_STYLE};
use crate::ui::helpers::create_border_block;
use crate::widgets::helpers::{format_timestamp, truncate_middle};

/// Rows per receipt: summary line, hash line, spacer.
const ROW_HEIGHT: u16 = 3;

const HASH_WIDTH: usize = 23;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let title = format!("{} ({})", Route::Activity.title(), app.data.activity.len());
    let block = create_border_block(&title, !app.ui.has_active_popup());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    if app.data.activity.is_empty() {
        frame.render_widget(
            Paragraph::new("No transfers yet")
                .style(LABEL_STYLE)
                .alignment(Alignment::Center),
            Rect::new(inner.x, inner.y + inner.height / 2, inner.width, 1),
        );
        return;
    }

    // Keep the selection visible by scrolling whole receipts.
    let visible = usize::from((inner.height / ROW_HEIGHT).max(1));
    let first = app.nav.activity_index.saturating_sub(visible - 1);

    for (slot, (index, receipt)) in app
        .data
        .activity
        .iter()
        .enumerate()
        .skip(first)
        .take(visible)
        .enumerate()
    {
        let y = inner.y + slot as u16 * ROW_HEIGHT;
        let height = ROW_HEIGHT.min(inner.bottom().saturating_sub(y)).min(2);
        let row = Rect::new(inner.x, y, inner.width, height);
        let selected = index == app.nav.activity_index;
        if selected {
            frame.buffer_mut().set_style(row, SELECTED_STYLE);
        }
        frame.render_widget(Paragraph::new(receipt_lines(receipt, selected)), row);
    }
}

fn receipt_lines(receipt: &TransferReceipt, selected: bool) -> Vec<Line<'static>> {
    let marker = if selected { "▶ " } else { "  " };
    vec![
        Line::from(vec![
            Span::styled(marker, Style::default().fg(PRIMARY_COLOR)),
            Span::styled(
                receipt.amount_label(),
                AMOUNT_STYLE.add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::raw(receipt.route_label()),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(truncate_middle(&receipt.tx_hash, HASH_WIDTH), LABEL_STYLE),
            Span::raw("  "),
            Span::styled(
                format_timestamp(&receipt.submitted_at),
                Style::default().fg(MUTED_COLOR),
            ),
        ]),
    ]
}
