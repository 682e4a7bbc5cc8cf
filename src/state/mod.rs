//! State management for the tokenbridge TUI.
//!
//! The state is decomposed by concern:
//!
//! - [`NavigationState`] - active route and list selections
//! - [`DataState`] - account, balances and submitted transfers
//! - [`UiState`] - popups, the transfer form and toasts
//! - [`ConfirmationState`] - the confirmation screen's workflow phase
//! - [`TransactionStore`] - the pending transfer awaiting confirmation
//! - [`AppConfig`] - persistent configuration
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                             App                              │
//! ├───────────────┬───────────┬──────────┬───────────────────────┤
//! │NavigationState│ DataState │ UiState  │ ConfirmationState     │
//! │ - route       │ - account │ - popups │ TransactionStore      │
//! │ - selections  │ - balances│ - form   │                       │
//! │               │ - activity│ - toasts │                       │
//! └───────────────┴───────────┴──────────┴───────────────────────┘
//! ```
//!
//! Background tasks report back through [`AppMessage`]s, which the main loop
//! drains once per iteration.

use tokio::sync::mpsc;

use crate::domain::{Address, Amount, ChainId, PendingTransaction};

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod backends;
pub mod config;
pub mod confirmation;
pub mod data;
pub mod navigation;
pub mod platform;
pub mod transaction_store;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use backends::Backends;
pub use config::{AppConfig, TokenConfig, WalletConfig};
pub use confirmation::{ConfirmOutcome, ConfirmationPhase, ConfirmationState};
pub use data::DataState;
pub use navigation::{NavigationState, Route};
pub use transaction_store::TransactionStore;
pub use ui_state::{PopupState, TransferFormState, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main app loop.
#[derive(Debug)]
pub enum AppMessage {
    /// Connected account resolved, or why it could not be.
    AccountLoaded(Result<Address, String>),
    /// A balance query finished.
    BalanceLoaded {
        /// Chain key.
        chain: String,
        /// Token symbol.
        symbol: String,
        /// Balance or error description.
        result: Result<Amount, String>,
    },
    /// The wallet's connected network changed.
    ProviderChanged(Option<ChainId>),
    /// Result of comparing the wallet's network with the transfer's source.
    NetworkChecked(Option<bool>),
    /// Fee estimate for the transfer form finished.
    FeeEstimated(Result<Box<PendingTransaction>, String>),
    /// A confirmation attempt finished.
    ConfirmFinished(ConfirmOutcome),
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    // ========================================================================
    // Sub-states
    // ========================================================================
    /// Active route and selections.
    pub nav: NavigationState,

    /// Account, balances and activity.
    pub data: DataState,

    /// Popups and toasts.
    pub ui: UiState,

    /// Confirmation screen workflow.
    pub confirmation: ConfirmationState,

    /// Transfer awaiting confirmation.
    pub transactions: TransactionStore,

    // ========================================================================
    // App-level state
    // ========================================================================
    /// Loaded configuration.
    pub config: AppConfig,

    /// Whether the application should exit.
    pub exit: bool,

    /// Animation tick counter for spinners.
    pub animation_tick: u64,

    // ========================================================================
    // Async Communication
    // ========================================================================
    // Sends use `let _ = tx.send(...)`: the receiver only goes away on shutdown.
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,

    // ========================================================================
    // Backends
    // ========================================================================
    pub(crate) backends: Backends,
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Message processing
mod app_messages;

// Command execution, input handling
mod app_commands;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
