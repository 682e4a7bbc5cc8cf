//! Transfer confirmation route.
//!
//! Shows the pending transfer as a card with the amount, the route between
//! chains and the fee estimate, followed by the transfer button and any
//! network or submission message. Renders nothing when no transfer is
//! pending; the route guard sends the user home on the next update.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
};

use crate::constants::CONFIRMATION_CARD_WIDTH;
use crate::domain::PendingTransaction;
use crate::state::{App, ConfirmationPhase, ConfirmationState, Route};
use crate::theme::{
    BUTTON_BUSY_STYLE, BUTTON_STYLE, ERROR_COLOR, LABEL_STYLE, MUTED_COLOR, WARNING_COLOR,
};
use crate::ui::helpers::{create_border_block, create_popup_block};
use crate::ui::layout::centered_popup_area;
use crate::widgets::route_lines;

const CARD_HEIGHT: u16 = 14;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(tx) = app.transactions.get() else {
        return;
    };

    let block = create_border_block(Route::TransferConfirmation.title(), !app.ui.has_active_popup());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }
    frame.render_widget(
        Paragraph::new("Esc returns home").style(Style::default().fg(MUTED_COLOR)),
        Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), 1),
    );

    let card_area = centered_popup_area(inner, CONFIRMATION_CARD_WIDTH, CARD_HEIGHT);
    render_card(frame, card_area, tx, &app.confirmation);
}

fn render_card(frame: &mut Frame, area: Rect, tx: &PendingTransaction, state: &ConfirmationState) {
    let card = create_popup_block("Review");
    let inner = card.inner(area);
    frame.render_widget(Clear, area);
    frame.render_widget(card, area);

    let [amount, _, route, _, fee, _, button, message, error] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(1),
    ])
    .areas(inner);

    let amount_line = Line::from(vec![
        Span::styled(format!("{} ", tx.token.glyph()), LABEL_STYLE),
        Span::styled(
            tx.amount_label(),
            Style::default()
                .fg(WARNING_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(amount_line).alignment(Alignment::Center),
        amount,
    );

    frame.render_widget(
        Paragraph::new(route_lines(&tx.from, &tx.to)).alignment(Alignment::Center),
        route,
    );

    let fee_line = Line::from(vec![
        Span::styled("Estimated gas fee  ", LABEL_STYLE),
        Span::raw(tx.fee_label()),
    ]);
    frame.render_widget(Paragraph::new(fee_line).alignment(Alignment::Center), fee);

    let (label, style) = if state.is_submitting() {
        ("  Submitting...  ", BUTTON_BUSY_STYLE)
    } else {
        ("  Transfer  ", BUTTON_STYLE)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(label, style)).alignment(Alignment::Center),
        button,
    );

    if let Some(line) = status_line(state) {
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), message);
    }

    if let Some(last_error) = state.last_error() {
        frame.render_widget(
            Paragraph::new(last_error.to_string())
                .style(Style::default().fg(ERROR_COLOR))
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true }),
            error,
        );
    }
}

/// Message under the button: the switch instruction wins over phase hints.
fn status_line(state: &ConfirmationState) -> Option<Line<'static>> {
    if let Some(message) = state.mismatch_message() {
        return Some(Line::styled(
            message.to_string(),
            Style::default().fg(ERROR_COLOR),
        ));
    }
    let hint = match state.phase() {
        ConfirmationPhase::WrongNetwork => "Confirming will ask the wallet to switch networks",
        ConfirmationPhase::Unverified => "Wallet network not verified",
        ConfirmationPhase::Ready | ConfirmationPhase::Submitting | ConfirmationPhase::Submitted => {
            return None;
        }
    };
    Some(Line::styled(hint, Style::default().fg(MUTED_COLOR)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfirmOutcome;
    use crate::test_utils::{TransferMother, app, buffer_contains, buffer_lines, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn draw(terminal: &mut Terminal<TestBackend>, app: &App) {
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .expect("draw should succeed");
    }

    #[rstest]
    fn test_renders_nothing_without_transaction(
        app: App,
        mut test_terminal: Terminal<TestBackend>,
    ) {
        draw(&mut test_terminal, &app);

        assert!(
            buffer_lines(&test_terminal)
                .iter()
                .all(|line| line.trim().is_empty())
        );
    }

    #[rstest]
    fn test_card_snapshot(mut app: App, mut test_terminal: Terminal<TestBackend>) {
        app.transactions.set(TransferMother::eth_to_polygon());
        app.confirmation.apply_network_check(Some(true));

        draw(&mut test_terminal, &app);

        // Card interior: 54 columns from x = 23, rows 14..26 on a 100x40 screen.
        let lines = buffer_lines(&test_terminal);
        let card = lines[14..26]
            .iter()
            .map(|line| line.chars().skip(23).take(54).collect::<String>())
            .map(|row| row.trim().to_string())
            .collect::<Vec<_>>()
            .join("\n");

        insta::assert_snapshot!(card.trim_end(), @r"
        (ETH) 1.5 ETH

        ┌──────────┐   ┌─────────┐
        │ Ethereum │ → │ Polygon │
        └──────────┘   └─────────┘

        Estimated gas fee  ~ 0.0015 ETH

        Transfer
        ");
    }

    #[rstest]
    fn test_card_contents(mut app: App, mut test_terminal: Terminal<TestBackend>) {
        app.transactions.set(TransferMother::eth_to_polygon());
        app.confirmation.apply_network_check(Some(true));

        draw(&mut test_terminal, &app);

        assert!(buffer_contains(&test_terminal, "Confirm Transfer"));
        assert!(buffer_contains(&test_terminal, "(ETH) 1.5 ETH"));
        assert!(buffer_contains(&test_terminal, "│ Ethereum │ → │ Polygon │"));
        assert!(buffer_contains(&test_terminal, "Estimated gas fee  ~ 0.0015 ETH"));
        assert!(buffer_contains(&test_terminal, "  Transfer  "));
        assert!(!buffer_contains(&test_terminal, "Switch to"));
    }

    #[rstest]
    fn test_button_shows_submitting(mut app: App, mut test_terminal: Terminal<TestBackend>) {
        app.transactions.set(TransferMother::eth_to_polygon());
        app.confirmation.apply_network_check(Some(true));
        assert!(app.confirmation.begin_submit());

        draw(&mut test_terminal, &app);

        assert!(buffer_contains(&test_terminal, "Submitting..."));
    }

    #[rstest]
    fn test_mismatch_message_in_red(mut app: App, mut test_terminal: Terminal<TestBackend>) {
        app.transactions.set(TransferMother::eth_to_polygon());
        app.confirmation.apply_network_check(Some(false));
        assert!(app.confirmation.begin_submit());
        app.confirmation.finish(&ConfirmOutcome::SwitchRejected {
            message: "Switch to Ethereum to continue".to_string(),
        });

        draw(&mut test_terminal, &app);

        let lines = buffer_lines(&test_terminal);
        let (y, line) = lines
            .iter()
            .enumerate()
            .find(|(_, line)| line.contains("Switch to Ethereum to continue"))
            .expect("mismatch message should be rendered");
        let x = line
            .chars()
            .position(|c| c == 'S')
            .expect("message should start with S");
        let cell = &test_terminal.backend().buffer()[(x as u16, y as u16)];
        assert_eq!(cell.fg, ERROR_COLOR);
    }

    #[rstest]
    fn test_last_error_rendered(mut app: App, mut test_terminal: Terminal<TestBackend>) {
        app.transactions.set(TransferMother::usdc_to_ethereum());
        app.confirmation.apply_network_check(Some(true));
        assert!(app.confirmation.begin_submit());
        app.confirmation.finish(&ConfirmOutcome::Failed {
            error: crate::domain::BridgeError::Submission("relayer offline".to_string()),
            switched: false,
        });

        draw(&mut test_terminal, &app);

        assert!(buffer_contains(
            &test_terminal,
            "Bridge submission failed: relayer offline"
        ));
        assert!(buffer_contains(&test_terminal, "250 USDC"));
    }
}
