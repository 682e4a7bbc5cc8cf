//! Chains, chain identifiers and account addresses.

use std::fmt;

use alloy::primitives;
use serde::{Deserialize, Serialize};

use super::BridgeError;

// ============================================================================
// ChainId
// ============================================================================

/// Numeric EVM chain id as reported by `eth_chainId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainId(pub u64);

impl ChainId {
    /// Returns the chain id as a `0x`-prefixed hex quantity.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("{:#x}", self.0)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ChainDescriptor
// ============================================================================

/// A chain the bridge can move tokens between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainDescriptor {
    /// Stable key used in configuration and display rules (e.g. `ethereum`).
    pub key: String,
    /// Human-readable chain name.
    pub name: String,
    /// Chain id the chain's RPC endpoint is expected to report.
    pub chain_id: ChainId,
    /// JSON-RPC endpoint.
    pub rpc_url: String,
    /// Block explorer base URL.
    #[serde(default)]
    pub explorer_url: Option<String>,
}

impl ChainDescriptor {
    /// Creates a descriptor without an explorer.
    #[must_use]
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        chain_id: u64,
        rpc_url: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            chain_id: ChainId(chain_id),
            rpc_url: rpc_url.into(),
            explorer_url: None,
        }
    }

    /// Sets the block explorer base URL.
    #[must_use]
    pub fn with_explorer(mut self, url: impl Into<String>) -> Self {
        self.explorer_url = Some(url.into());
        self
    }

    /// Returns the explorer link for a transaction hash, if an explorer is configured.
    #[must_use]
    pub fn explorer_tx_url(&self, tx_hash: &str) -> Option<String> {
        self.explorer_url
            .as_deref()
            .map(|base| format!("{}/tx/{tx_hash}", base.trim_end_matches('/')))
    }
}

/// Returns the display name of a chain.
#[must_use]
pub fn chain_name(chain: &ChainDescriptor) -> &str {
    &chain.name
}

// ============================================================================
// Address
// ============================================================================

/// A `0x`-prefixed 20-byte account or contract address.
///
/// Displayed in EIP-55 checksum form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(primitives::Address);

impl Address {
    /// Parses and validates an address.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::InvalidInput`] if the value is not `0x` followed
    /// by 40 hex digits.
    pub fn parse(value: &str) -> Result<Self, BridgeError> {
        let value = value.trim();
        if !value.starts_with("0x") {
            return Err(BridgeError::invalid_input(format!(
                "'{value}' is not a valid address"
            )));
        }
        value
            .parse::<primitives::Address>()
            .map(Self)
            .map_err(|e| BridgeError::invalid_input(format!("'{value}' is not a valid address: {e}")))
    }

    /// Returns the underlying alloy address.
    #[must_use]
    pub const fn inner(&self) -> primitives::Address {
        self.0
    }

    /// Returns a shortened form such as `0x1234...abcd`.
    #[must_use]
    pub fn short(&self) -> String {
        let full = self.to_string();
        format!("{}...{}", &full[..6], &full[full.len() - 4..])
    }
}

impl From<primitives::Address> for Address {
    fn from(address: primitives::Address) -> Self {
        Self(address)
    }
}

impl TryFrom<String> for Address {
    type Error = BridgeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.to_string()
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_checksum(None))
    }
}

// ============================================================================
// Tests
// ============================================================================
