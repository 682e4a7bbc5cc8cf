//! Colors and styles shared by the tokenbridge views.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Color Constants
// ============================================================================

/// Focused elements, the logo and the transfer button.
pub const PRIMARY_COLOR: Color = Color::Cyan;

/// Source-chain badge color.
pub const SECONDARY_COLOR: Color = Color::Blue;

pub const SUCCESS_COLOR: Color = Color::Green;

/// Amounts and in-flight indicators.
pub const WARNING_COLOR: Color = Color::Yellow;

pub const ERROR_COLOR: Color = Color::Red;

/// Hints, labels and timestamps.
pub const MUTED_COLOR: Color = Color::Gray;

/// Destination-chain badge color.
pub const ACCENT_COLOR: Color = Color::Magenta;

// ============================================================================
// Style Constants
// ============================================================================

/// Default border style for unfocused elements.
pub const BORDER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Border style for focused/active elements.
pub const FOCUSED_BORDER_STYLE: Style = Style::new().fg(PRIMARY_COLOR);

/// Title style for focused/active elements.
pub const FOCUSED_TITLE_STYLE: Style = Style::new().fg(PRIMARY_COLOR).add_modifier(Modifier::BOLD);

/// Selected row in a list.
pub const SELECTED_STYLE: Style = Style::new().bg(Color::DarkGray);

/// Balance text once settled.
pub const AMOUNT_STYLE: Style = Style::new().fg(WARNING_COLOR);

/// Labels next to values.
pub const LABEL_STYLE: Style = Style::new().fg(MUTED_COLOR);

/// The confirmation card's transfer button.
pub const BUTTON_STYLE: Style = Style::new()
    .fg(Color::Black)
    .bg(PRIMARY_COLOR)
    .add_modifier(Modifier::BOLD);

/// The transfer button while a submission is in flight.
pub const BUTTON_BUSY_STYLE: Style = Style::new().fg(Color::Black).bg(Color::DarkGray);
