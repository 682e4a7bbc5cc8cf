//! Domain types for bridging tokens between chains.
//!
//! This module holds the data model shared by the clients, the application
//! state and the views:
//!
//! - [`AsyncValue`] - values that pass through load states
//! - [`Amount`] - arbitrary-precision token amounts and formatting
//! - [`Token`] - tokens and the symbol display rule
//! - [`ChainDescriptor`], [`ChainId`], [`Address`] - chains and accounts
//! - [`PendingTransaction`], [`BridgeRequest`], [`TransferReceipt`] - transfers
//! - [`BridgeError`] - errors from wallet, chain and bridge operations

mod amount;
mod async_value;
mod chain;
mod error;
mod token;
mod transaction;

// ============================================================================
// Re-exports
// ============================================================================

pub use amount::{Amount, parse_units, trim_decimals};
pub use async_value::AsyncValue;
pub use chain::{Address, ChainDescriptor, ChainId, chain_name};
pub use error::BridgeError;
pub use token::{Token, display_symbol};
pub use transaction::{BridgeRequest, PendingTransaction, TransferReceipt};

/// Formats a token amount for display using the token's decimals.
#[must_use]
pub fn format_token_amount(amount: &Amount, token: &Token) -> String {
    trim_decimals(amount, token.decimals)
}
