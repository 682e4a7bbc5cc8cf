//! Capabilities the app consumes: wallet, chain connectivity and bridge.
//!
//! The traits in this module are the seams between the application state and
//! the outside world. Two backend families implement them:
//!
//! - [`rpc`] - alloy providers over HTTP for chains and an EIP-1193 style wallet
//! - [`sandbox`] - in-process wallet, chains and bridge for demos and tests
//!
//! The app itself talks to [`WalletBackend`] and [`ChainBackend`], which
//! dispatch to one family or the other.

use std::future::Future;

use tokio::sync::watch;

use crate::domain::{
    Address, Amount, BridgeError, BridgeRequest, ChainDescriptor, ChainId, Token, TransferReceipt,
};

pub mod http;
pub mod rpc;
pub mod sandbox;

// ============================================================================
// Re-exports
// ============================================================================

pub use rpc::{RpcChain, RpcWallet};
pub use sandbox::{SandboxBridge, SandboxChain, SandboxWallet};

// ============================================================================
// Capability Traits
// ============================================================================

/// The user's wallet.
pub trait WalletProvider: Send + Sync {
    /// Returns the connected account.
    fn connected_account(&self) -> impl Future<Output = Result<Address, BridgeError>> + Send;

    /// Returns the chain the wallet is connected to, or `None` when no
    /// provider is connected.
    fn connected_network(&self)
    -> impl Future<Output = Result<Option<ChainId>, BridgeError>> + Send;

    /// Asks the wallet to switch to `chain`.
    fn change_network(
        &self,
        chain: &ChainDescriptor,
    ) -> impl Future<Output = Result<(), BridgeError>> + Send;

    /// Subscribes to connected-network changes.
    fn subscribe(&self) -> watch::Receiver<Option<ChainId>>;
}

/// Connectivity handle for a single chain.
pub trait ChainConnection: Send + Sync {
    /// Returns the chain id reported by the chain's endpoint.
    fn network_id(&self) -> impl Future<Output = Result<ChainId, BridgeError>> + Send;

    /// Returns `account`'s balance of `token` on this chain.
    fn balance(
        &self,
        token: &Token,
        account: &Address,
    ) -> impl Future<Output = Result<Amount, BridgeError>> + Send;
}

/// The cross-chain bridge.
pub trait Bridge: Send + Sync {
    /// Estimates the fee for a transfer, in the token's smallest unit.
    fn estimate_fee(
        &self,
        request: &BridgeRequest,
    ) -> impl Future<Output = Result<Amount, BridgeError>> + Send;

    /// Submits a transfer.
    fn submit(
        &self,
        request: BridgeRequest,
    ) -> impl Future<Output = Result<TransferReceipt, BridgeError>> + Send;
}

// ============================================================================
// Backend Dispatch
// ============================================================================

/// Wallet implementation selected at startup.
#[derive(Debug, Clone)]
pub enum WalletBackend {
    /// Wallet reached over JSON-RPC.
    Rpc(RpcWallet),
    /// In-process wallet.
    Sandbox(SandboxWallet),
}

impl WalletProvider for WalletBackend {
    async fn connected_account(&self) -> Result<Address, BridgeError> {
        match self {
            Self::Rpc(wallet) => wallet.connected_account().await,
            Self::Sandbox(wallet) => wallet.connected_account().await,
        }
    }

    async fn connected_network(&self) -> Result<Option<ChainId>, BridgeError> {
        match self {
            Self::Rpc(wallet) => wallet.connected_network().await,
            Self::Sandbox(wallet) => wallet.connected_network().await,
        }
    }

    async fn change_network(&self, chain: &ChainDescriptor) -> Result<(), BridgeError> {
        match self {
            Self::Rpc(wallet) => wallet.change_network(chain).await,
            Self::Sandbox(wallet) => wallet.change_network(chain).await,
        }
    }

    fn subscribe(&self) -> watch::Receiver<Option<ChainId>> {
        match self {
            Self::Rpc(wallet) => wallet.subscribe(),
            Self::Sandbox(wallet) => wallet.subscribe(),
        }
    }
}

/// Chain connection implementation selected at startup.
#[derive(Debug, Clone)]
pub enum ChainBackend {
    /// Chain reached over JSON-RPC.
    Rpc(RpcChain),
    /// In-process chain.
    Sandbox(SandboxChain),
}

impl ChainConnection for ChainBackend {
    async fn network_id(&self) -> Result<ChainId, BridgeError> {
        match self {
            Self::Rpc(chain) => chain.network_id().await,
            Self::Sandbox(chain) => chain.network_id().await,
        }
    }

    async fn balance(&self, token: &Token, account: &Address) -> Result<Amount, BridgeError> {
        match self {
            Self::Rpc(chain) => chain.balance(token, account).await,
            Self::Sandbox(chain) => chain.balance(token, account).await,
        }
    }
}
