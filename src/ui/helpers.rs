//! UI helper functions for creating styled blocks and widgets.
//!
//! Every bordered area in the app goes through these helpers so focus and
//! popup styling stay consistent.

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::theme::{BORDER_STYLE, FOCUSED_BORDER_STYLE, FOCUSED_TITLE_STYLE, MUTED_COLOR, PRIMARY_COLOR};

// ============================================================================
// Border Block Helpers
// ============================================================================

/// Creates a bordered block with proper styling based on focus state.
///
/// Focused blocks get a double border and a `●` marker before the title.
///
/// # Example
///
/// ```ignore
/// let focused_block = create_border_block("Tokens", true);
/// let unfocused_block = create_border_block("Activity", false);
/// ```
#[must_use]
pub fn create_border_block(title: &str, focused: bool) -> Block<'_> {
    let (border_style, border_set, title_style, display_title) = if focused {
        (
            FOCUSED_BORDER_STYLE,
            border::DOUBLE,
            FOCUSED_TITLE_STYLE,
            if title.is_empty() {
                String::new()
            } else {
                format!(" ● {title} ")
            },
        )
    } else {
        (
            BORDER_STYLE,
            border::ROUNDED,
            Style::new()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
            if title.is_empty() {
                String::new()
            } else {
                format!(" {title} ")
            },
        )
    };

    Block::default()
        .borders(Borders::ALL)
        .title(display_title)
        .title_style(title_style)
        .border_set(border_set)
        .border_style(border_style)
}

/// Creates a popup-style block with centered title and rounded borders.
#[must_use]
pub fn create_popup_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(BORDER_STYLE)
}

// ============================================================================
// Key Hints
// ============================================================================

/// Builds a `key:Action  key:Action` hint line with highlighted keys.
#[must_use]
pub fn key_hints(hints: &[(&'static str, &'static str)]) -> Line<'static> {
    let key_style = Style::default()
        .fg(PRIMARY_COLOR)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(MUTED_COLOR);

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, action)) in hints.iter().enumerate() {
        let separator = if i + 1 < hints.len() { "  " } else { "" };
        spans.push(Span::styled(*key, key_style));
        spans.push(Span::styled(format!(":{action}{separator}"), text_style));
    }
    Line::from(spans)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_lines;
    use insta::assert_snapshot;
    use ratatui::{
        Terminal,
        backend::TestBackend,
        layout::{Constraint, Layout},
    };

    #[test]
    fn test_block_states() {
        let mut terminal =
            Terminal::new(TestBackend::new(30, 9)).expect("terminal creation should succeed");

        terminal
            .draw(|frame| {
                let areas = Layout::vertical([Constraint::Length(3); 3]).split(frame.area());
                frame.render_widget(create_border_block("Tokens", false), areas[0]);
                frame.render_widget(create_border_block("Tokens", true), areas[1]);
                frame.render_widget(create_popup_block("Transfer"), areas[2]);
            })
            .expect("draw should succeed");

        assert_snapshot!(buffer_lines(&terminal).join("\n"), @r"
        ╭ Tokens ────────────────────╮
        │                            │
        ╰────────────────────────────╯
        ╔ ● Tokens ══════════════════╗
        ║                            ║
        ╚════════════════════════════╝
        ╭───────── Transfer ─────────╮
        │                            │
        ╰────────────────────────────╯
        ");
    }

    #[test]
    fn test_key_hints_text() {
        let line = key_hints(&[("y", "Yes"), ("n/Esc", "No")]);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "y:Yes  n/Esc:No");
    }
}
