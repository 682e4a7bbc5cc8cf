//! UI rendering for the tokenbridge TUI.
//!
//! # Module Structure
//!
//! - `views` - One view per route (home, confirmation, activity)
//! - `popups` - Modal dialogs (transfer form, quit confirmation)
//! - `components` - Reusable UI components (toast notifications)
//! - `layout` - Layout calculations
//! - `header` - Header bar rendering
//! - `footer` - Footer bar rendering
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod popups;
pub mod views;

use ratatui::{Frame, layout::Rect};

use crate::state::{App, PopupState, Route};

// ============================================================================
// Main Render Entry Point
// ============================================================================

/// Draws the whole screen for the current app state.
///
/// Order matters: the route view first, then any popup, then the toast on
/// top of everything.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let layout = layout::calculate_app_layout(size);

    header::render(frame, layout.header, app);
    render_route(app, frame, layout.main);
    footer::render(frame, layout.footer, app);

    render_popups(app, frame, size);

    if let Some((message, _)) = &app.ui.toast {
        components::render_toast(frame, size, message);
    }
}

// ============================================================================
// Internal Rendering Functions
// ============================================================================

fn render_route(app: &App, frame: &mut Frame, area: Rect) {
    match app.nav.route() {
        Route::Home => views::home::render(frame, area, app),
        Route::TransferConfirmation => views::confirmation::render(frame, area, app),
        Route::Activity => views::activity::render(frame, area, app),
    }
}

fn render_popups(app: &App, frame: &mut Frame, area: Rect) {
    match &app.ui.popup_state {
        PopupState::TransferForm(form) => popups::transfer_form::render(frame, area, form),
        PopupState::ConfirmQuit => popups::confirm::render(frame, area),
        PopupState::None => {}
    }
}

// ============================================================================
// Tests
// ============================================================================
