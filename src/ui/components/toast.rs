//! Toast notification overlay.
//!
//! Toasts sit in the bottom-right corner above the footer and never take
//! input. The message prefix picks the color: `[+]` for success, `[x]` for
//! errors.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::border,
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::theme::{ERROR_COLOR, SUCCESS_COLOR};

// ============================================================================
// Constants
// ============================================================================

const MIN_TOAST_WIDTH: u16 = 20;

const TOAST_HEIGHT: u16 = 3;

const TOAST_PADDING_RIGHT: u16 = 2;

const TOAST_PADDING_BOTTOM: u16 = 2;

/// Borders plus one cell of padding on each side.
const TOAST_WIDTH_PADDING: u16 = 4;

// ============================================================================
// Public API
// ============================================================================

/// Renders `message` as a toast inside `area`.
pub fn render_toast(frame: &mut Frame, area: Rect, message: &str) {
    let toast_area = toast_position(area, message);

    frame.render_widget(Clear, toast_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(Style::default().fg(Color::DarkGray))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(toast_area);
    frame.render_widget(block, toast_area);

    let text = Paragraph::new(message)
        .style(Style::default().fg(text_color(message)))
        .alignment(Alignment::Center);
    frame.render_widget(text, inner);
}

// ============================================================================
// Internal Helpers
// ============================================================================

/// Bottom-right placement, at most half the area wide.
#[must_use]
fn toast_position(area: Rect, message: &str) -> Rect {
    let message_len = u16::try_from(message.chars().count()).unwrap_or(u16::MAX);
    let width = message_len
        .saturating_add(TOAST_WIDTH_PADDING)
        .min(area.width / 2)
        .max(MIN_TOAST_WIDTH)
        .min(area.width);

    let x = area.x + area.width.saturating_sub(width + TOAST_PADDING_RIGHT);
    let y = area.y + area.height.saturating_sub(TOAST_HEIGHT + TOAST_PADDING_BOTTOM);

    Rect::new(x, y, width, TOAST_HEIGHT.min(area.height))
}

#[must_use]
fn text_color(message: &str) -> Color {
    if message.starts_with("[+]") {
        SUCCESS_COLOR
    } else if message.starts_with("[x]") {
        ERROR_COLOR
    } else {
        Color::White
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{buffer_contains, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    #[case::short("[+] Copied", Rect::new(0, 0, 100, 40), 20)]
    #[case::long(
        "[x] Transfer failed: the relayer refused the request because it is offline",
        Rect::new(0, 0, 100, 40),
        50
    )]
    #[case::narrow("[+] Opened in browser", Rect::new(0, 0, 12, 10), 12)]
    fn test_toast_width(#[case] message: &str, #[case] area: Rect, #[case] expected: u16) {
        let position = toast_position(area, message);
        assert_eq!(position.width, expected);
        assert!(position.right() <= area.right());
        assert!(position.bottom() <= area.bottom());
    }

    #[test]
    fn test_color_follows_prefix() {
        assert_eq!(text_color("[+] Transfer submitted"), SUCCESS_COLOR);
        assert_eq!(text_color("[x] Wallet not connected"), ERROR_COLOR);
        assert_eq!(text_color("Refreshing"), Color::White);
    }

    #[rstest]
    fn test_toast_renders_bottom_right(test_terminal: Terminal<TestBackend>) {
        let mut terminal = test_terminal;
        terminal
            .draw(|frame| render_toast(frame, frame.area(), "[+] Transfer submitted"))
            .expect("draw should succeed");

        assert!(buffer_contains(&terminal, "[+] Transfer submitted"));
        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(97, 35)].symbol(), "╮");
        assert_eq!(buffer[(97, 35)].fg, Color::DarkGray);
    }
}
