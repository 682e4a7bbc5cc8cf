//! Application lifecycle management.
//!
//! This module contains the core lifecycle methods for the `App`:
//! - `new()` - Creates a new application instance
//! - `run()` - Main event loop
//! - Background tasks: provider watching, account and balance loading,
//!   network checks, fee estimates and confirmations

use std::time::Instant;

use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tokio::sync::mpsc;

use crate::client::{Bridge, ChainConnection, WalletBackend, WalletProvider};
use crate::constants::{TICK_RATE, TOAST_TICKS};
use crate::domain::{Amount, ChainDescriptor, PendingTransaction, Token};
use crate::tui::Tui;
use crate::ui;

use super::confirmation::{check_correct_network, confirm_transfer};
use super::{
    App, AppConfig, AppMessage, Backends, ConfirmationState, DataState, NavigationState, Route,
    TransactionStore, TransferFormState, UiState,
};

// ============================================================================
// Lifecycle Methods
// ============================================================================

impl App {
    /// Creates a new App for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured backends cannot be created.
    pub fn new(config: AppConfig, force_sandbox: bool) -> Result<Self> {
        let backends = Backends::from_config(&config, force_sandbox)?;
        Ok(Self::with_backends(config, backends))
    }

    /// Creates a new App talking to the given backends.
    #[must_use]
    pub fn with_backends(config: AppConfig, backends: Backends) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            nav: NavigationState::new(),
            data: DataState::new(),
            ui: UiState::new(),
            confirmation: ConfirmationState::new(),
            transactions: TransactionStore::new(),
            config,
            exit: false,
            animation_tick: 0,
            message_tx,
            message_rx,
            backends,
        }
    }

    /// Runs the main application loop.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal operations fail.
    pub fn run(&mut self, terminal: &mut Tui) -> Result<()> {
        self.start_background_tasks();
        self.refresh_account();

        let mut last_tick = Instant::now();

        while !self.exit {
            self.process_messages();

            let timeout = TICK_RATE.saturating_sub(last_tick.elapsed());

            if event::poll(timeout)? {
                match event::read()? {
                    Event::Key(key)
                        if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) =>
                    {
                        self.handle_key_event(key);
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|frame| ui::render(self, frame))?;
                    }
                    _ => {}
                }
            }

            if last_tick.elapsed() >= TICK_RATE {
                self.animation_tick = self.animation_tick.wrapping_add(1);
                self.ui.tick_toast();
                terminal.draw(|frame| ui::render(self, frame))?;
                last_tick = Instant::now();
            }
        }

        Ok(())
    }

    // ========================================================================
    // Background Tasks
    // ========================================================================

    /// Forwards wallet network changes to the main loop.
    ///
    /// An RPC wallet has no push channel of its own, so its network is
    /// polled and published to the same watch channel.
    pub(crate) fn start_background_tasks(&self) {
        let mut network_rx = self.backends.wallet.subscribe();
        let message_tx = self.message_tx.clone();
        let _ = message_tx.send(AppMessage::ProviderChanged(*network_rx.borrow_and_update()));

        tokio::spawn(async move {
            while network_rx.changed().await.is_ok() {
                let network = *network_rx.borrow_and_update();
                if message_tx.send(AppMessage::ProviderChanged(network)).is_err() {
                    break;
                }
            }
        });

        if let WalletBackend::Rpc(wallet) = &self.backends.wallet {
            tokio::spawn(wallet.clone().watch_network(self.config.poll_interval()));
        }
    }

    /// Loads the connected account. Balances follow once it resolves.
    pub(crate) fn refresh_account(&mut self) {
        self.data.account = std::mem::take(&mut self.data.account).into_refreshing();

        let wallet = self.backends.wallet.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = wallet.connected_account().await.map_err(|e| e.to_string());
            let _ = message_tx.send(AppMessage::AccountLoaded(result));
        });
    }

    /// Loads every configured token's balance on every configured chain.
    ///
    /// Does nothing until an account is known.
    pub(crate) fn refresh_balances(&mut self) {
        let Some(account) = self.data.account.data().cloned() else {
            tracing::debug!("no account yet, skipping balance refresh");
            return;
        };

        for chain in &self.config.chains {
            let Some(connection) = self.backends.chain(&chain.key).cloned() else {
                continue;
            };
            for token in self.config.tokens_on(&chain.key) {
                self.data.mark_balance_refreshing(&chain.key, &token.symbol);

                let connection = connection.clone();
                let account = account.clone();
                let chain_key = chain.key.clone();
                let message_tx = self.message_tx.clone();
                tokio::spawn(async move {
                    let result = connection
                        .balance(&token, &account)
                        .await
                        .map_err(|e| e.to_string());
                    let _ = message_tx.send(AppMessage::BalanceLoaded {
                        chain: chain_key,
                        symbol: token.symbol,
                        result,
                    });
                });
            }
        }
    }

    /// Checks the wallet's network against the pending transfer's source.
    ///
    /// Only runs while the confirmation route is active.
    pub(crate) fn spawn_network_check(&self) {
        if self.nav.route() != Route::TransferConfirmation {
            return;
        }
        let Some(transaction) = self.transactions.get().cloned() else {
            return;
        };
        let Some(source) = self.backends.chain(&transaction.from.key).cloned() else {
            tracing::warn!("no connection for chain '{}'", transaction.from.key);
            let _ = self.message_tx.send(AppMessage::NetworkChecked(None));
            return;
        };

        let wallet = self.backends.wallet.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let check = check_correct_network(&wallet, &source, Some(&transaction)).await;
            let _ = message_tx.send(AppMessage::NetworkChecked(check));
        });
    }

    /// Starts a confirmation of the pending transfer.
    ///
    /// Ignored while another confirmation is in flight or after the
    /// transfer was submitted.
    pub(crate) fn confirm(&mut self) {
        let Some(transaction) = self.transactions.get().cloned() else {
            return;
        };
        let Some(source) = self.backends.chain(&transaction.from.key).cloned() else {
            self.ui.show_toast(
                format!("[x] No connection for {}", transaction.from.name),
                TOAST_TICKS,
            );
            return;
        };
        if !self.confirmation.begin_submit() {
            tracing::debug!("confirmation already in flight, ignoring");
            return;
        }
        tracing::info!("confirming {}", transaction.amount_label());

        let wallet = self.backends.wallet.clone();
        let bridge = self.backends.bridge.clone();
        let account = self.data.account.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let outcome = confirm_transfer(&wallet, &source, &bridge, &transaction, &account).await;
            let _ = message_tx.send(AppMessage::ConfirmFinished(outcome));
        });
    }

    // ========================================================================
    // Transfer Form
    // ========================================================================

    /// Opens the transfer form for the selected token.
    pub(crate) fn open_transfer_form(&mut self) {
        let Some(source) = self.source_chain().cloned() else {
            return;
        };
        let Some(token) = self
            .config
            .tokens_on(&source.key)
            .into_iter()
            .nth(self.nav.token_index)
        else {
            return;
        };
        let destinations = self.config.destinations_from(&source.key);
        self.ui
            .open_transfer_form(TransferFormState::new(token, source, destinations));
    }

    /// Validates the form and asks the bridge for a fee estimate.
    ///
    /// The pending transfer is stored once the estimate arrives.
    pub(crate) fn submit_transfer_form(&mut self) {
        let account = self.data.account.data().cloned();
        let Some(form) = self.ui.transfer_form_mut() else {
            return;
        };
        if form.estimating {
            return;
        }
        let Some(account) = account else {
            form.error = Some("Wallet not connected".to_string());
            return;
        };
        let amount = match form.parsed_amount() {
            Ok(amount) => amount,
            Err(e) => {
                form.error = Some(e.to_string());
                return;
            }
        };
        let Some(to) = form.destination().cloned() else {
            form.error = Some("No destination chain configured".to_string());
            return;
        };

        form.estimating = true;
        form.error = None;
        let mut pending = PendingTransaction {
            token: form.token.without_balance(),
            amount,
            from: form.from.clone(),
            to,
            estimated_fee: Amount::zero(),
        };
        let request = pending.to_request(account);

        let bridge = self.backends.bridge.clone();
        let message_tx = self.message_tx.clone();
        tokio::spawn(async move {
            let result = match bridge.estimate_fee(&request).await {
                Ok(fee) => {
                    pending.estimated_fee = fee;
                    Ok(Box::new(pending))
                }
                Err(e) => {
                    tracing::warn!("fee estimate failed: {e}");
                    Err(e.to_string())
                }
            };
            let _ = message_tx.send(AppMessage::FeeEstimated(result));
        });
    }

    // ========================================================================
    // Route Guard & Queries
    // ========================================================================

    /// Leaves the confirmation route when there is nothing to confirm.
    pub(crate) fn enforce_route_guard(&mut self) {
        if self.nav.route() == Route::TransferConfirmation && self.transactions.is_empty() {
            tracing::debug!("no pending transfer, redirecting home");
            self.nav.navigate_to(Route::Home);
        }
    }

    /// Chain currently selected as the transfer source.
    #[must_use]
    pub fn source_chain(&self) -> Option<&ChainDescriptor> {
        self.config.chains.get(self.nav.source_chain_index)
    }

    /// Tokens on the source chain with their balances attached.
    #[must_use]
    pub fn home_tokens(&self) -> Vec<Token> {
        self.source_chain()
            .map(|chain| {
                self.data
                    .with_balances(&chain.key, self.config.tokens_on(&chain.key))
            })
            .unwrap_or_default()
    }

    /// Chain matching the wallet's connected network, if configured.
    #[must_use]
    pub fn connected_chain(&self) -> Option<&ChainDescriptor> {
        let network = self.data.connected_network?;
        self.config
            .chains
            .iter()
            .find(|chain| chain.chain_id == network)
    }
}
