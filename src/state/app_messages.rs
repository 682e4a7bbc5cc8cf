//! Message processing for the tokenbridge application.
//!
//! Background tasks report results as [`AppMessage`]s; this module folds
//! them into the app state once per loop iteration.

use super::{App, AppMessage, ConfirmOutcome, Route};
use crate::constants::TOAST_TICKS;
use crate::domain::{AsyncValue, ChainId};

impl App {
    pub(crate) fn process_messages(&mut self) {
        while let Ok(message) = self.message_rx.try_recv() {
            match message {
                AppMessage::AccountLoaded(Ok(account)) => {
                    tracing::info!("connected account {}", account.short());
                    self.data.account = AsyncValue::Successful(account);
                    self.refresh_balances();
                }
                AppMessage::AccountLoaded(Err(error)) => {
                    tracing::warn!("account unavailable: {error}");
                    self.data.account = AsyncValue::Failed(error);
                }
                AppMessage::BalanceLoaded {
                    chain,
                    symbol,
                    result,
                } => {
                    if let Err(error) = &result {
                        tracing::warn!("{symbol} balance on {chain} failed: {error}");
                    }
                    self.data.set_balance(&chain, &symbol, result.into());
                }
                AppMessage::ProviderChanged(network) => {
                    self.handle_provider_changed(network);
                }
                AppMessage::NetworkChecked(check) => {
                    // A check that lands after leaving the screen is stale.
                    if self.nav.route() == Route::TransferConfirmation {
                        self.confirmation.apply_network_check(check);
                    }
                }
                AppMessage::FeeEstimated(Ok(pending)) => {
                    // The form may have been cancelled while estimating.
                    if !self.ui.transfer_form_mut().is_some_and(|form| form.estimating) {
                        tracing::debug!("dropping fee estimate for a closed transfer form");
                        continue;
                    }
                    self.transactions.set(*pending);
                    self.confirmation.reset();
                    self.ui.dismiss_popup();
                    self.nav.navigate_to(Route::TransferConfirmation);
                    self.spawn_network_check();
                }
                AppMessage::FeeEstimated(Err(error)) => {
                    if let Some(form) = self.ui.transfer_form_mut() {
                        form.estimating = false;
                        form.error = Some(format!("Fee estimate failed: {error}"));
                    }
                }
                AppMessage::ConfirmFinished(outcome) => {
                    self.handle_confirm_finished(outcome);
                }
            }
        }

        self.enforce_route_guard();
    }

    fn handle_provider_changed(&mut self, network: Option<ChainId>) {
        let previous = self.data.connected_network;
        self.data.connected_network = network;

        // A wallet that just connected may now expose an account.
        let account_missing = matches!(
            self.data.account,
            AsyncValue::Pending | AsyncValue::Failed(_)
        );
        if previous.is_none() && network.is_some() && account_missing {
            self.refresh_account();
        }
        self.spawn_network_check();
    }

    fn handle_confirm_finished(&mut self, outcome: ConfirmOutcome) {
        self.confirmation.finish(&outcome);
        match outcome {
            ConfirmOutcome::Submitted { receipt, .. } => {
                self.data.push_receipt(receipt);
                self.nav.navigate_to(Route::Activity);
                self.nav.activity_index = 0;
                self.transactions.clear();
                self.ui.show_toast("[+] Transfer submitted", TOAST_TICKS);
                self.refresh_balances();
            }
            ConfirmOutcome::Failed { error, .. } => {
                self.ui
                    .show_toast(format!("[x] Transfer failed: {error}"), TOAST_TICKS);
            }
            ConfirmOutcome::AccountUnavailable { .. } => {
                self.ui.show_toast("[x] Wallet not connected", TOAST_TICKS);
            }
            ConfirmOutcome::SwitchRejected { .. } => {}
        }
    }
}
