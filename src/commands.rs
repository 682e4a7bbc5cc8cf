//! Command pattern for key event handling in the TUI application.
//!
//! Key input is translated into [`AppCommand`]s by [`KeyMapper`] according
//! to the current [`InputContext`], so keybindings can be tested without an
//! app instance.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! app.execute_command(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Token list on the home route.
    Home,
    /// Transfer confirmation route.
    Confirmation,
    /// Activity route.
    Activity,
    /// Transfer form popup is open.
    TransferForm,
    /// Quit confirmation popup is open.
    ConfirmQuit,
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Ask for quit confirmation.
    RequestQuit,
    /// Exit the application.
    ConfirmQuit,
    /// Reload the account and balances.
    Refresh,
    /// Close the popup, or go back to the home route.
    Dismiss,

    // === Navigation ===
    /// Move selection up in the current list.
    MoveUp,
    /// Move selection down in the current list.
    MoveDown,
    /// Open the transfer form for the selected token.
    Select,
    /// Select the next source chain.
    CycleSourceChain,
    /// Show the activity route.
    OpenActivity,

    // === Confirmation ===
    /// Confirm and submit the pending transfer.
    Confirm,

    // === Activity ===
    /// Copy the selected transaction hash.
    CopyHash,
    /// Open the selected transaction in the block explorer.
    OpenExplorer,

    // === Transfer Form ===
    /// Type a character in the amount input.
    TypeChar(char),
    /// Delete the last character of the amount input.
    Backspace,
    /// Select the next destination chain.
    CycleDestination,
    /// Validate the form and request a fee estimate.
    SubmitForm,

    // === No Operation ===
    /// No action to perform (unhandled key).
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the current input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command.
    ///
    /// Ctrl+C quits from every context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::ConfirmQuit;
        }

        match context {
            InputContext::Home => Self::map_home_keys(key),
            InputContext::Confirmation => Self::map_confirmation_keys(key),
            InputContext::Activity => Self::map_activity_keys(key),
            InputContext::TransferForm => Self::map_transfer_form_keys(key),
            InputContext::ConfirmQuit => Self::map_confirm_quit_keys(key),
        }
    }

    fn map_home_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::RequestQuit,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Char('n') => AppCommand::CycleSourceChain,
            KeyCode::Char('a') => AppCommand::OpenActivity,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Enter => AppCommand::Select,
            _ => AppCommand::Noop,
        }
    }

    fn map_confirmation_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Enter | KeyCode::Char('t') => AppCommand::Confirm,
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::RequestQuit,
            _ => AppCommand::Noop,
        }
    }

    fn map_activity_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Char('c') => AppCommand::CopyHash,
            KeyCode::Char('o') => AppCommand::OpenExplorer,
            KeyCode::Char('r') => AppCommand::Refresh,
            KeyCode::Esc | KeyCode::Char('h') => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::RequestQuit,
            _ => AppCommand::Noop,
        }
    }

    fn map_transfer_form_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::SubmitForm,
            KeyCode::Tab => AppCommand::CycleDestination,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    fn map_confirm_quit_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => AppCommand::ConfirmQuit,
            KeyCode::Char('n' | 'N') | KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
