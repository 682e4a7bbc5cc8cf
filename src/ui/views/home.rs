//! Home route: tokens on the selected source chain with their balances.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::constants::LIST_SPINNER_SIZE;
use crate::domain::chain_name;
use crate::state::{App, Route};
use crate::theme::{LABEL_STYLE, MUTED_COLOR, PRIMARY_COLOR, SELECTED_STYLE};
use crate::ui::helpers::create_border_block;
use crate::widgets::BalanceDisplay;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block(Route::Home.title(), !app.ui.has_active_popup());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(chain) = app.source_chain() else {
        frame.render_widget(
            Paragraph::new("No chains configured").style(LABEL_STYLE),
            inner,
        );
        return;
    };
    if inner.height == 0 {
        return;
    }

    let chain_line = Line::from(vec![
        Span::styled("Source chain  ", LABEL_STYLE),
        Span::styled(
            chain_name(chain).to_string(),
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (n to change)", Style::default().fg(MUTED_COLOR)),
    ]);
    frame.render_widget(
        Paragraph::new(chain_line),
        Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1),
    );

    let tokens = app.home_tokens();
    if tokens.is_empty() {
        frame.render_widget(
            Paragraph::new(format!("No tokens configured for {}", chain_name(chain)))
                .style(LABEL_STYLE)
                .alignment(Alignment::Center),
            Rect::new(inner.x, inner.y + 2.min(inner.height - 1), inner.width, 1),
        );
        return;
    }

    let list_top = inner.y + 2;
    for (i, token) in tokens.iter().enumerate() {
        let y = list_top + i as u16;
        if y >= inner.bottom() {
            break;
        }
        let row = Rect::new(inner.x, y, inner.width, 1);
        let selected = i == app.nav.token_index;
        if selected {
            frame.buffer_mut().set_style(row, SELECTED_STYLE);
        }

        let marker = if selected { "▶ " } else { "  " };
        let label = Line::from(vec![
            Span::styled(marker, Style::default().fg(PRIMARY_COLOR)),
            Span::styled(format!("{:<7}", token.glyph()), LABEL_STYLE),
            Span::styled(
                token.display_symbol(&chain.key).to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(label), row);

        let balance = BalanceDisplay::new(&chain.key, token)
            .spinner_size(LIST_SPINNER_SIZE)
            .tick(app.animation_tick);
        frame.render_widget(
            Paragraph::new(balance.to_line()).alignment(Alignment::Right),
            Rect::new(row.x, row.y, row.width.saturating_sub(2), 1),
        );
    }
}
