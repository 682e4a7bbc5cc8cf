//! Transfer form popup.
//!
//! Collects the amount and destination chain for the selected token. The
//! amount field shows its validation or fee-estimate error underneath.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::domain::chain_name;
use crate::state::TransferFormState;
use crate::theme::{ACCENT_COLOR, ERROR_COLOR, LABEL_STYLE, MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};
use crate::ui::helpers::{create_popup_block, key_hints};
use crate::ui::layout::centered_popup_area;

const POPUP_WIDTH: u16 = 56;
const POPUP_HEIGHT: u16 = 13;

/// Render the transfer form for `form`.
pub fn render(frame: &mut Frame, area: Rect, form: &TransferFormState) {
    let title = format!("Send {}", form.token.display_symbol(&form.from.key));
    let popup_area = centered_popup_area(area, POPUP_WIDTH, POPUP_HEIGHT);
    let popup_block = create_popup_block(&title);
    let inner = popup_block.inner(popup_area);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block, popup_area);

    let [route, amount, status, _, help] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(3),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let destination = form.destination().map_or("none", chain_name);
    let route_line = Line::from(vec![
        Span::styled("From ", LABEL_STYLE),
        Span::raw(chain_name(&form.from).to_string()),
        Span::styled("  To ", LABEL_STYLE),
        Span::styled(
            destination.to_string(),
            Style::default()
                .fg(ACCENT_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" (Tab)", Style::default().fg(MUTED_COLOR)),
    ]);
    frame.render_widget(
        Paragraph::new(route_line),
        Rect::new(route.x + 1, route.y, route.width.saturating_sub(2), 1),
    );

    render_amount_field(frame, amount, form);

    let status_line = if form.estimating {
        Some(Line::styled(
            "Estimating fee...",
            Style::default().fg(WARNING_COLOR),
        ))
    } else {
        form.error
            .as_ref()
            .map(|error| Line::styled(error.clone(), Style::default().fg(ERROR_COLOR)))
    };
    if let Some(line) = status_line {
        frame.render_widget(
            Paragraph::new(line),
            Rect::new(status.x + 1, status.y, status.width.saturating_sub(2), 1),
        );
    }

    frame.render_widget(
        Paragraph::new(key_hints(&[
            ("Enter", "Review"),
            ("Tab", "Destination"),
            ("Esc", "Cancel"),
        ]))
        .alignment(Alignment::Center),
        help,
    );
}

fn render_amount_field(frame: &mut Frame, area: Rect, form: &TransferFormState) {
    let (content, style) = if form.input.is_empty() {
        ("0.0_".to_string(), Style::default().fg(MUTED_COLOR))
    } else {
        (format!("{}_", form.input), Style::default())
    };

    let paragraph = Paragraph::new(content).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(
                Style::default()
                    .fg(PRIMARY_COLOR)
                    .add_modifier(Modifier::BOLD),
            )
            .title(format!("Amount ({})", form.token.symbol)),
    );
    frame.render_widget(paragraph, area);
}
