//! Pending transfers, bridge requests and submitted receipts.

use chrono::{DateTime, Utc};

use super::{Address, Amount, ChainDescriptor, Token, trim_decimals};

// ============================================================================
// Pending Transaction
// ============================================================================

/// A transfer the user has prepared but not yet confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingTransaction {
    /// Token being moved.
    pub token: Token,
    /// Raw amount in the token's smallest unit.
    pub amount: Amount,
    /// Chain the tokens leave from.
    pub from: ChainDescriptor,
    /// Chain the tokens arrive on.
    pub to: ChainDescriptor,
    /// Fee estimate in the token's smallest unit.
    pub estimated_fee: Amount,
}

impl PendingTransaction {
    /// Formatted amount, e.g. `1.5 ETH`.
    #[must_use]
    pub fn amount_label(&self) -> String {
        format!(
            "{} {}",
            trim_decimals(&self.amount, self.token.decimals),
            self.token.symbol
        )
    }

    /// Formatted fee estimate, e.g. `~ 0.0021 ETH`.
    #[must_use]
    pub fn fee_label(&self) -> String {
        format!(
            "~ {} {}",
            trim_decimals(&self.estimated_fee, self.token.decimals),
            self.token.symbol
        )
    }

    /// Builds the bridge request that moves this transfer to `destination_address`.
    #[must_use]
    pub fn to_request(&self, destination_address: Address) -> BridgeRequest {
        BridgeRequest {
            from: self.from.clone(),
            token: self.token.without_balance(),
            amount: self.amount.clone(),
            to: self.to.clone(),
            destination_address,
        }
    }
}

// ============================================================================
// Bridge Request / Receipt
// ============================================================================

/// Everything the bridge needs to move tokens across chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeRequest {
    /// Source chain.
    pub from: ChainDescriptor,
    /// Token being moved.
    pub token: Token,
    /// Raw amount.
    pub amount: Amount,
    /// Destination chain.
    pub to: ChainDescriptor,
    /// Receiving account on the destination chain.
    pub destination_address: Address,
}

/// A transfer accepted by the bridge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferReceipt {
    /// The request that was submitted.
    pub request: BridgeRequest,
    /// Source-chain transaction hash.
    pub tx_hash: String,
    /// When the bridge accepted the transfer.
    pub submitted_at: DateTime<Utc>,
}

impl TransferReceipt {
    /// Formatted amount with the token symbol.
    #[must_use]
    pub fn amount_label(&self) -> String {
        format!(
            "{} {}",
            trim_decimals(&self.request.amount, self.request.token.decimals),
            self.request.token.symbol
        )
    }

    /// `Source → Destination` route label.
    #[must_use]
    pub fn route_label(&self) -> String {
        format!("{} → {}", self.request.from.name, self.request.to.name)
    }

    /// Explorer link for the source-chain transaction.
    #[must_use]
    pub fn explorer_url(&self) -> Option<String> {
        self.request.from.explorer_tx_url(&self.tx_hash)
    }
}

// ============================================================================
// Tests
// ============================================================================
