//! Transfer confirmation workflow.
//!
//! The confirmation screen moves through [`ConfirmationPhase`] as network
//! checks and the submission complete. The async halves of the workflow,
//! [`check_correct_network`] and [`confirm_transfer`], are generic over the
//! capability traits and run in spawned tasks; their results come back to
//! [`ConfirmationState`] through app messages.

use crate::client::{Bridge, ChainConnection, WalletProvider};
use crate::domain::{
    Address, AsyncValue, BridgeError, ChainDescriptor, PendingTransaction, TransferReceipt,
    chain_name,
};

// ============================================================================
// Phase & State
// ============================================================================

/// Where the confirmation screen is in its workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmationPhase {
    /// The wallet's network has not been checked, or could not be.
    #[default]
    Unverified,
    /// The wallet is on a different chain than the transfer's source.
    WrongNetwork,
    /// The wallet is on the source chain.
    Ready,
    /// A confirmation is in flight.
    Submitting,
    /// The bridge accepted the transfer.
    Submitted,
}

/// View-facing state of the confirmation screen.
#[derive(Debug, Default)]
pub struct ConfirmationState {
    phase: ConfirmationPhase,
    mismatch_message: Option<String>,
    last_error: Option<String>,
}

impl ConfirmationState {
    /// Creates a fresh, unverified state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> ConfirmationPhase {
        self.phase
    }

    /// Instruction shown when the wallet refused to switch networks.
    #[must_use]
    pub fn mismatch_message(&self) -> Option<&str> {
        self.mismatch_message.as_deref()
    }

    /// Description of the last failed submission.
    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Returns `true` while a confirmation is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.phase, ConfirmationPhase::Submitting)
    }

    /// Forgets everything; used when a new transfer is opened.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Applies the result of an automatic network check.
    ///
    /// A matching network clears the mismatch message. Checks that land
    /// while a confirmation is in flight or done are ignored.
    pub fn apply_network_check(&mut self, check: Option<bool>) {
        if matches!(
            self.phase,
            ConfirmationPhase::Submitting | ConfirmationPhase::Submitted
        ) {
            return;
        }
        self.phase = match check {
            Some(true) => {
                self.mismatch_message = None;
                ConfirmationPhase::Ready
            }
            Some(false) => ConfirmationPhase::WrongNetwork,
            None => ConfirmationPhase::Unverified,
        };
    }

    /// Enters [`ConfirmationPhase::Submitting`].
    ///
    /// Returns `false`, changing nothing, if a confirmation is already in
    /// flight or the transfer was already submitted.
    pub fn begin_submit(&mut self) -> bool {
        if matches!(
            self.phase,
            ConfirmationPhase::Submitting | ConfirmationPhase::Submitted
        ) {
            return false;
        }
        self.phase = ConfirmationPhase::Submitting;
        self.last_error = None;
        true
    }

    /// Applies the outcome of [`confirm_transfer`].
    pub fn finish(&mut self, outcome: &ConfirmOutcome) {
        if outcome.switched() {
            self.mismatch_message = None;
        }
        match outcome {
            ConfirmOutcome::SwitchRejected { message } => {
                self.phase = ConfirmationPhase::WrongNetwork;
                self.mismatch_message = Some(message.clone());
            }
            ConfirmOutcome::AccountUnavailable { .. } => {
                self.phase = ConfirmationPhase::Ready;
            }
            ConfirmOutcome::Submitted { .. } => {
                self.phase = ConfirmationPhase::Submitted;
            }
            ConfirmOutcome::Failed { error, .. } => {
                self.phase = ConfirmationPhase::Ready;
                self.last_error = Some(error.to_string());
            }
        }
    }
}

// ============================================================================
// Outcome
// ============================================================================

/// How a confirmation attempt ended.
#[derive(Debug)]
pub enum ConfirmOutcome {
    /// The wallet refused to switch to the source chain; nothing was submitted.
    SwitchRejected {
        /// Instruction for the user.
        message: String,
    },
    /// The network is right but no account is available; nothing was submitted.
    AccountUnavailable {
        /// Whether a network switch happened first.
        switched: bool,
    },
    /// The bridge accepted the transfer.
    Submitted {
        /// Receipt returned by the bridge.
        receipt: TransferReceipt,
        /// Whether a network switch happened first.
        switched: bool,
    },
    /// The bridge refused the transfer.
    Failed {
        /// Bridge error.
        error: BridgeError,
        /// Whether a network switch happened first.
        switched: bool,
    },
}

impl ConfirmOutcome {
    /// Returns `true` if the wallet switched networks during the attempt.
    #[must_use]
    pub const fn switched(&self) -> bool {
        match self {
            Self::SwitchRejected { .. } => false,
            Self::AccountUnavailable { switched }
            | Self::Submitted { switched, .. }
            | Self::Failed { switched, .. } => *switched,
        }
    }
}

/// Instruction shown when the wallet has to be moved to `chain` by hand.
#[must_use]
pub fn switch_network_message(chain: &ChainDescriptor) -> String {
    format!("Switch to {} to continue", chain_name(chain))
}

// ============================================================================
// Workflow
// ============================================================================

/// Compares the wallet's connected chain with the transfer's source chain.
///
/// Returns `None` ("unknown") when there is no transaction, no connected
/// provider, or either network query fails.
pub async fn check_correct_network<W, C>(
    wallet: &W,
    source: &C,
    transaction: Option<&PendingTransaction>,
) -> Option<bool>
where
    W: WalletProvider,
    C: ChainConnection,
{
    let transaction = transaction?;

    let source_network = source
        .network_id()
        .await
        .inspect_err(|e| tracing::warn!("{} network query failed: {e}", transaction.from.name))
        .ok()?;
    let connected = wallet
        .connected_network()
        .await
        .inspect_err(|e| tracing::warn!("wallet network query failed: {e}"))
        .ok()??;

    Some(connected == source_network)
}

/// Runs one confirmation attempt for `transaction`.
///
/// Switches the wallet to the source chain first if needed, then submits the
/// transfer to the connected account. The bridge is called at most once.
pub async fn confirm_transfer<W, C, B>(
    wallet: &W,
    source: &C,
    bridge: &B,
    transaction: &PendingTransaction,
    account: &AsyncValue<Address>,
) -> ConfirmOutcome
where
    W: WalletProvider,
    C: ChainConnection,
    B: Bridge,
{
    let mut switched = false;
    if check_correct_network(wallet, source, Some(transaction)).await != Some(true) {
        if let Err(e) = wallet.change_network(&transaction.from).await {
            tracing::info!("network switch to {} refused: {e}", transaction.from.name);
            return ConfirmOutcome::SwitchRejected {
                message: switch_network_message(&transaction.from),
            };
        }
        switched = true;
    }

    let AsyncValue::Successful(destination) = account else {
        tracing::info!("no account available ({}), not submitting", account.status());
        return ConfirmOutcome::AccountUnavailable { switched };
    };

    let request = transaction.to_request(destination.clone());
    match bridge.submit(request).await {
        Ok(receipt) => {
            tracing::info!(
                "bridge accepted {} {} -> {} ({})",
                transaction.amount_label(),
                transaction.from.name,
                transaction.to.name,
                receipt.tx_hash
            );
            ConfirmOutcome::Submitted { receipt, switched }
        }
        Err(error) => {
            tracing::error!("bridge submission failed: {error}");
            ConfirmOutcome::Failed { error, switched }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
