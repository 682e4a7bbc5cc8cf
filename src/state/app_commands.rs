//! Command execution and input handling for the tokenbridge application.
//!
//! Keyboard input is mapped to commands for the current context, and those
//! commands are executed here against the application state.

use crossterm::event::KeyEvent;

use super::platform::clipboard;
use super::{App, PopupState, Route};
use crate::commands::{AppCommand, InputContext, KeyMapper};
use crate::constants::TOAST_TICKS;

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = KeyMapper::map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines the current input context from the popup and route.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        match &self.ui.popup_state {
            PopupState::ConfirmQuit => InputContext::ConfirmQuit,
            PopupState::TransferForm(_) => InputContext::TransferForm,
            PopupState::None => match self.nav.route() {
                Route::Home => InputContext::Home,
                Route::TransferConfirmation => InputContext::Confirmation,
                Route::Activity => InputContext::Activity,
            },
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::RequestQuit => {
                self.ui.open_confirm_quit();
            }
            AppCommand::ConfirmQuit => {
                self.exit = true;
            }
            AppCommand::Refresh => {
                if self.data.account.is_successful() {
                    self.refresh_balances();
                } else {
                    self.refresh_account();
                }
            }
            AppCommand::Dismiss => {
                if self.ui.has_active_popup() {
                    self.ui.dismiss_popup();
                } else {
                    self.nav.navigate_to(Route::Home);
                }
            }

            // === Navigation ===
            AppCommand::MoveUp => self.move_selection(-1),
            AppCommand::MoveDown => self.move_selection(1),
            AppCommand::Select => {
                self.open_transfer_form();
            }
            AppCommand::CycleSourceChain => {
                self.nav.cycle_source_chain(self.config.chains.len());
            }
            AppCommand::OpenActivity => {
                self.nav.navigate_to(Route::Activity);
            }

            // === Confirmation ===
            AppCommand::Confirm => {
                self.confirm();
            }

            // === Activity ===
            AppCommand::CopyHash => {
                self.copy_selected_hash();
            }
            AppCommand::OpenExplorer => {
                self.open_selected_in_explorer();
            }

            // === Transfer Form ===
            AppCommand::TypeChar(c) => {
                if let Some(form) = self.ui.transfer_form_mut() {
                    form.push_char(c);
                }
            }
            AppCommand::Backspace => {
                if let Some(form) = self.ui.transfer_form_mut() {
                    form.pop_char();
                }
            }
            AppCommand::CycleDestination => {
                if let Some(form) = self.ui.transfer_form_mut() {
                    form.cycle_destination();
                }
            }
            AppCommand::SubmitForm => {
                self.submit_transfer_form();
            }

            AppCommand::Noop => {}
        }

        self.enforce_route_guard();
    }

    fn move_selection(&mut self, delta: isize) {
        match self.nav.route() {
            Route::Home => {
                let len = self.home_tokens().len();
                self.nav.move_token_selection(delta, len);
            }
            Route::Activity => {
                let len = self.data.activity.len();
                self.nav.move_activity_selection(delta, len);
            }
            Route::TransferConfirmation => {}
        }
    }

    // ========================================================================
    // Activity Actions
    // ========================================================================

    fn copy_selected_hash(&mut self) {
        let Some(receipt) = self.data.activity.get(self.nav.activity_index) else {
            return;
        };
        match clipboard::copy_text(&receipt.tx_hash) {
            Ok(()) => {
                self.ui.show_toast("[+] Transaction hash copied", TOAST_TICKS);
            }
            Err(e) => {
                tracing::warn!("clipboard copy failed: {e}");
                self.ui.show_toast(format!("[x] {e}"), TOAST_TICKS);
            }
        }
    }

    fn open_selected_in_explorer(&mut self) {
        let url = self
            .data
            .activity
            .get(self.nav.activity_index)
            .and_then(|receipt| receipt.explorer_url());

        match url {
            Some(url) => match open::that(&url) {
                Ok(()) => {
                    self.ui.show_toast("[+] Opened in browser", TOAST_TICKS);
                }
                Err(e) => {
                    self.ui
                        .show_toast(format!("[x] Failed to open browser: {e}"), TOAST_TICKS);
                }
            },
            None => {
                self.ui.show_toast("[x] Explorer link unavailable", TOAST_TICKS);
            }
        }
    }
}
