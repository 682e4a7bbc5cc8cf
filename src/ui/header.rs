//! Header rendering for the tokenbridge TUI.
//!
//! Renders the logo on the left and the wallet's network and account on the
//! right.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::domain::{AsyncValue, chain_name};
use crate::state::App;
use crate::theme::{ERROR_COLOR, MUTED_COLOR, SUCCESS_COLOR, WARNING_COLOR};
use crate::widgets::Spinner;

use super::helpers::create_border_block;

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    let title_area = Rect::new(
        area.x + 2,
        area.y + 1,
        13.min(area.width.saturating_sub(2)),
        1,
    );
    frame.render_widget(Paragraph::new(logo()), title_area);

    if area.width > 40 {
        let status_width = area.width.saturating_sub(19);
        let status_area = Rect::new(area.right() - status_width - 2, area.y + 1, status_width, 1);
        frame.render_widget(
            Paragraph::new(wallet_status(app)).alignment(Alignment::Right),
            status_area,
        );
    }
}

fn logo() -> Line<'static> {
    Line::from(vec![
        "[".into(),
        "token".cyan().bold(),
        "bridge".magenta().bold(),
        "]".into(),
    ])
}

/// Network name and short account, e.g. `● Ethereum  0x5290...9EE7`.
fn wallet_status(app: &App) -> Line<'static> {
    let network = match (app.data.connected_network, app.connected_chain()) {
        (None, _) => Span::styled("○ No network", Style::default().fg(MUTED_COLOR)),
        (Some(_), Some(chain)) => Span::styled(
            format!("● {}", chain_name(chain)),
            Style::default()
                .fg(SUCCESS_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        (Some(id), None) => Span::styled(
            format!("● Chain {id}"),
            Style::default().fg(WARNING_COLOR),
        ),
    };

    let account = match &app.data.account {
        AsyncValue::Successful(address) => {
            Span::styled(address.short(), Style::default().fg(MUTED_COLOR))
        }
        AsyncValue::Failed(_) => {
            Span::styled("Wallet not connected", Style::default().fg(ERROR_COLOR))
        }
        AsyncValue::Pending | AsyncValue::Loading | AsyncValue::Reloading(_) => {
            Spinner::new(app.animation_tick, 1).to_span(Style::default().fg(WARNING_COLOR))
        }
    };

    Line::from(vec![network, Span::raw("  "), account])
}

// ============================================================================
// Tests
// ============================================================================
