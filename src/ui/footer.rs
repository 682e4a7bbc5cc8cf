//! Footer bar with the keyboard shortcuts of the current input context.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::Paragraph,
};

use crate::commands::InputContext;
use crate::state::App;

use super::helpers::key_hints;

// ============================================================================
// Footer Rendering
// ============================================================================

/// Shortcut hints for each input context, in display order.
#[must_use]
pub fn shortcuts(context: InputContext) -> &'static [(&'static str, &'static str)] {
    match context {
        InputContext::Home => &[
            ("↑↓", "Select"),
            ("Enter", "Transfer"),
            ("n", "Chain"),
            ("a", "Activity"),
            ("r", "Refresh"),
            ("q", "Quit"),
        ],
        InputContext::Confirmation => &[("Enter/t", "Transfer"), ("Esc", "Back"), ("q", "Quit")],
        InputContext::Activity => &[
            ("↑↓", "Select"),
            ("c", "Copy hash"),
            ("o", "Explorer"),
            ("Esc", "Back"),
            ("q", "Quit"),
        ],
        InputContext::TransferForm => &[
            ("Enter", "Review"),
            ("Tab", "Destination"),
            ("Esc", "Cancel"),
        ],
        InputContext::ConfirmQuit => &[("y", "Yes"), ("n/Esc", "No")],
    }
}

/// Renders the footer bar with keyboard shortcuts.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let footer = Paragraph::new(key_hints(shortcuts(app.get_input_context())))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::AppCommand;
    use crate::test_utils::{app, buffer_lines};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    fn render_footer(app: &App, width: u16) -> String {
        let mut terminal =
            Terminal::new(TestBackend::new(width, 1)).expect("terminal creation should succeed");
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .expect("draw should succeed");
        buffer_lines(&terminal).join("")
    }

    #[rstest]
    fn test_home_footer(app: App) {
        insta::assert_snapshot!(render_footer(&app, 80).trim(), @"↑↓:Select  Enter:Transfer  n:Chain  a:Activity  r:Refresh  q:Quit");
    }

    #[rstest]
    fn test_footer_follows_context(mut app: App) {
        app.execute_command(AppCommand::OpenActivity);
        assert!(render_footer(&app, 80).contains("c:Copy hash"));

        app.execute_command(AppCommand::RequestQuit);
        let content = render_footer(&app, 80);
        assert!(content.contains("y:Yes"));
        assert!(!content.contains("c:Copy hash"));
    }

    #[rstest]
    fn test_footer_is_centered(app: App) {
        let content = render_footer(&app, 80);
        let leading = content.len() - content.trim_start().len();
        let trailing = content.len() - content.trim_end().len();
        assert!(leading.abs_diff(trailing) <= 1);
    }

    #[rstest]
    fn test_footer_narrow_does_not_panic(app: App) {
        assert_eq!(render_footer(&app, 20).chars().count(), 20);
    }
}
