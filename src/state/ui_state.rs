//! UI presentation state: popups, the transfer form and toasts.

use crate::domain::{Amount, BridgeError, ChainDescriptor, Token, parse_units};

// ============================================================================
// Transfer Form
// ============================================================================

/// Input state of the transfer form popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferFormState {
    /// Token being sent, as it exists on the source chain.
    pub token: Token,
    /// Source chain.
    pub from: ChainDescriptor,
    destinations: Vec<ChainDescriptor>,
    destination_index: usize,
    /// Amount typed so far.
    pub input: String,
    /// Validation or estimation error shown under the input.
    pub error: Option<String>,
    /// Whether a fee estimate is in flight.
    pub estimating: bool,
}

impl TransferFormState {
    /// Opens the form for `token` on `from` with the given destination choices.
    #[must_use]
    pub fn new(token: Token, from: ChainDescriptor, destinations: Vec<ChainDescriptor>) -> Self {
        Self {
            token,
            from,
            destinations,
            destination_index: 0,
            input: String::new(),
            error: None,
            estimating: false,
        }
    }

    /// Currently selected destination chain.
    #[must_use]
    pub fn destination(&self) -> Option<&ChainDescriptor> {
        self.destinations.get(self.destination_index)
    }

    /// Selects the next destination chain.
    pub fn cycle_destination(&mut self) {
        if !self.destinations.is_empty() {
            self.destination_index = (self.destination_index + 1) % self.destinations.len();
        }
    }

    /// Appends a digit or the decimal point; anything else is ignored.
    pub fn push_char(&mut self, c: char) {
        let accepted = c.is_ascii_digit() || (c == '.' && !self.input.contains('.'));
        if accepted {
            self.input.push(c);
            self.error = None;
        }
    }

    /// Deletes the last character.
    pub fn pop_char(&mut self) {
        self.input.pop();
        self.error = None;
    }

    /// Parses the typed amount.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::InvalidInput`] for malformed or zero amounts.
    pub fn parsed_amount(&self) -> Result<Amount, BridgeError> {
        let amount = parse_units(&self.input, self.token.decimals)?;
        if amount.is_zero() {
            return Err(BridgeError::invalid_input("amount must be greater than zero"));
        }
        Ok(amount)
    }
}

// ============================================================================
// Popup State
// ============================================================================

/// Which modal, if any, is on top of the current route.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    /// No popup.
    #[default]
    None,
    /// Transfer form for a token.
    TransferForm(Box<TransferFormState>),
    /// Quit confirmation.
    ConfirmQuit,
}

// ============================================================================
// UiState
// ============================================================================

/// Presentation state that is not tied to a route.
#[derive(Debug, Default)]
pub struct UiState {
    /// Active popup.
    pub popup_state: PopupState,
    /// Toast message and remaining ticks.
    pub toast: Option<(String, u8)>,
}

impl UiState {
    /// Creates an empty UI state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if any popup is shown.
    #[must_use]
    pub fn has_active_popup(&self) -> bool {
        self.popup_state != PopupState::None
    }

    /// Opens the transfer form.
    pub fn open_transfer_form(&mut self, form: TransferFormState) {
        self.popup_state = PopupState::TransferForm(Box::new(form));
    }

    /// Mutable access to the open transfer form.
    pub fn transfer_form_mut(&mut self) -> Option<&mut TransferFormState> {
        match &mut self.popup_state {
            PopupState::TransferForm(form) => Some(form.as_mut()),
            _ => None,
        }
    }

    /// Opens the quit confirmation.
    pub fn open_confirm_quit(&mut self) {
        self.popup_state = PopupState::ConfirmQuit;
    }

    /// Closes any popup.
    pub fn dismiss_popup(&mut self) {
        self.popup_state = PopupState::None;
    }

    /// Shows a toast notification for `ticks` ticks (each ~100ms).
    pub fn show_toast(&mut self, message: impl Into<String>, ticks: u8) {
        self.toast = Some((message.into(), ticks));
    }

    /// Decrements the toast countdown.
    ///
    /// # Returns
    ///
    /// `true` if the toast was removed (countdown reached zero).
    pub fn tick_toast(&mut self) -> bool {
        if let Some((_, ref mut ticks)) = self.toast {
            if *ticks > 1 {
                *ticks -= 1;
                false
            } else {
                self.toast = None;
                true
            }
        } else {
            false
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{ChainMother, TokenMother};

    fn form() -> TransferFormState {
        TransferFormState::new(
            TokenMother::usdc(),
            ChainMother::ethereum(),
            vec![ChainMother::polygon(), ChainMother::local()],
        )
    }

    #[test]
    fn test_form_input_filters_characters() {
        let mut form = form();
        for c in "1a2.5.0x".chars() {
            form.push_char(c);
        }
        assert_eq!(form.input, "12.50");

        form.pop_char();
        assert_eq!(form.input, "12.5");
        assert_eq!(form.parsed_amount().unwrap(), Amount::from(12_500_000u64));
    }

    #[test]
    fn test_form_rejects_zero_and_empty() {
        let mut form = form();
        assert!(form.parsed_amount().is_err());

        form.push_char('0');
        let err = form.parsed_amount().unwrap_err();
        assert!(err.to_string().contains("greater than zero"));
    }

    #[test]
    fn test_form_cycles_destinations() {
        let mut form = form();
        assert_eq!(form.destination().map(|c| c.key.as_str()), Some("polygon"));
        form.cycle_destination();
        assert_eq!(form.destination().map(|c| c.key.as_str()), Some("local"));
        form.cycle_destination();
        assert_eq!(form.destination().map(|c| c.key.as_str()), Some("polygon"));

        let mut lonely = TransferFormState::new(TokenMother::usdc(), ChainMother::ethereum(), vec![]);
        lonely.cycle_destination();
        assert!(lonely.destination().is_none());
    }

    #[test]
    fn test_ui_state_toast_lifecycle() {
        let mut ui = UiState::new();
        assert!(ui.toast.is_none());

        ui.show_toast("Hello", 2);
        assert_eq!(ui.toast.as_ref().map(|(msg, _)| msg.as_str()), Some("Hello"));

        assert!(!ui.tick_toast()); // 2 -> 1
        assert!(ui.tick_toast()); // 1 -> removed
        assert!(ui.toast.is_none());
        assert!(!ui.tick_toast());
    }

    #[test]
    fn test_popup_transitions() {
        let mut ui = UiState::new();
        assert!(!ui.has_active_popup());
        assert!(ui.transfer_form_mut().is_none());

        ui.open_transfer_form(form());
        assert!(ui.has_active_popup());
        ui.transfer_form_mut().unwrap().push_char('3');
        assert_eq!(ui.transfer_form_mut().unwrap().input, "3");

        ui.open_confirm_quit();
        assert_eq!(ui.popup_state, PopupState::ConfirmQuit);
        ui.dismiss_popup();
        assert!(!ui.has_active_popup());
    }
}
