//! Layout calculations for the tokenbridge TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{FOOTER_HEIGHT, HEADER_HEIGHT};

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Header area (logo, wallet status)
    pub header: Rect,
    /// Area of the active route
    pub main: Rect,
    /// Footer area (keybinding hints)
    pub footer: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the main application layout from the terminal area
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    AppLayout {
        header: chunks[0],
        main: chunks[1],
        footer: chunks[2],
    }
}

/// Calculate a centered popup area within the parent, keeping a two-cell
/// margin on every side.
#[must_use]
pub fn centered_popup_area(parent: Rect, width: u16, height: u16) -> Rect {
    let popup_width = width.min(parent.width.saturating_sub(4));
    let popup_height = height.min(parent.height.saturating_sub(4));

    let popup_x = parent.x + (parent.width.saturating_sub(popup_width)) / 2;
    let popup_y = parent.y + (parent.height.saturating_sub(popup_height)) / 2;

    Rect::new(popup_x, popup_y, popup_width, popup_height)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_layout_splits_full_height() {
        let layout = calculate_app_layout(Rect::new(0, 0, 80, 24));

        assert_eq!(layout.header.height, HEADER_HEIGHT);
        assert_eq!(layout.footer.height, FOOTER_HEIGHT);
        assert_eq!(layout.footer.y, 23);
        assert_eq!(
            layout.header.height + layout.main.height + layout.footer.height,
            24
        );
    }

    #[test]
    fn test_centered_popup_area() {
        let popup = centered_popup_area(Rect::new(0, 0, 100, 40), 50, 10);
        assert_eq!(popup, Rect::new(25, 15, 50, 10));

        // Clamped to leave a margin on small terminals.
        let popup = centered_popup_area(Rect::new(0, 0, 40, 10), 50, 10);
        assert_eq!(popup.width, 36);
        assert_eq!(popup.height, 6);
    }
}
