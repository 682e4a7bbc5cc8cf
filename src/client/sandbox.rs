//! In-process wallet, chains and bridge.
//!
//! The sandbox backends let the whole app run without a wallet or RPC
//! endpoints, and they record every call so tests can assert on them.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use alloy::primitives::B256;
use chrono::Utc;
use tokio::sync::watch;

use super::{Bridge, ChainConnection, WalletProvider};
use crate::domain::{
    Address, Amount, BridgeError, BridgeRequest, ChainDescriptor, ChainId, Token, TransferReceipt,
};

/// Account the sandbox wallet reports by default.
pub const SANDBOX_ACCOUNT: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

/// Fee charged by the sandbox bridge, in basis points of the amount.
const SANDBOX_FEE_BPS: u64 = 10;

async fn simulate_latency(latency: Duration) {
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }
}

// ============================================================================
// SandboxWallet
// ============================================================================

#[derive(Debug)]
struct WalletInner {
    account: Option<Address>,
    reject_switch: bool,
    switch_requests: Vec<ChainId>,
}

/// In-process wallet.
#[derive(Debug, Clone)]
pub struct SandboxWallet {
    inner: Arc<Mutex<WalletInner>>,
    network_tx: Arc<watch::Sender<Option<ChainId>>>,
    latency: Duration,
}

impl SandboxWallet {
    /// Creates a wallet connected to `network` with `account`.
    #[must_use]
    pub fn new(account: Option<Address>, network: Option<ChainId>) -> Self {
        let (network_tx, _) = watch::channel(network);
        Self {
            inner: Arc::new(Mutex::new(WalletInner {
                account,
                reject_switch: false,
                switch_requests: Vec::new(),
            })),
            network_tx: Arc::new(network_tx),
            latency: Duration::ZERO,
        }
    }

    /// Sets the simulated round-trip time of every call.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Makes subsequent network switch requests fail.
    pub fn set_reject_switch(&self, reject: bool) {
        self.lock().reject_switch = reject;
    }

    /// Simulates the user switching networks in the wallet.
    pub fn set_network(&self, network: Option<ChainId>) {
        self.network_tx.send_replace(network);
    }

    /// Chains a switch was requested to, in order.
    #[must_use]
    pub fn switch_requests(&self) -> Vec<ChainId> {
        self.lock().switch_requests.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, WalletInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl WalletProvider for SandboxWallet {
    async fn connected_account(&self) -> Result<Address, BridgeError> {
        simulate_latency(self.latency).await;
        self.lock().account.clone().ok_or(BridgeError::NotConnected)
    }

    async fn connected_network(&self) -> Result<Option<ChainId>, BridgeError> {
        simulate_latency(self.latency).await;
        Ok(*self.network_tx.borrow())
    }

    async fn change_network(&self, chain: &ChainDescriptor) -> Result<(), BridgeError> {
        simulate_latency(self.latency).await;
        let rejected = {
            let mut inner = self.lock();
            inner.switch_requests.push(chain.chain_id);
            inner.reject_switch
        };
        if rejected {
            return Err(BridgeError::SwitchRejected {
                chain: chain.name.clone(),
            });
        }
        self.set_network(Some(chain.chain_id));
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<ChainId>> {
        self.network_tx.subscribe()
    }
}

// ============================================================================
// SandboxChain
// ============================================================================

/// In-process chain with fixed balances keyed by token symbol.
#[derive(Debug, Clone)]
pub struct SandboxChain {
    chain_id: ChainId,
    balances: Arc<Mutex<HashMap<String, Amount>>>,
    failing: bool,
    latency: Duration,
}

impl SandboxChain {
    /// Creates a chain reporting `chain_id` with no balances.
    #[must_use]
    pub fn new(chain_id: ChainId) -> Self {
        Self {
            chain_id,
            balances: Arc::new(Mutex::new(HashMap::new())),
            failing: false,
            latency: Duration::ZERO,
        }
    }

    /// Sets the balance returned for `symbol`.
    #[must_use]
    pub fn with_balance(self, symbol: &str, amount: Amount) -> Self {
        self.balances
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(symbol.to_string(), amount);
        self
    }

    /// Makes balance queries fail.
    #[must_use]
    pub fn failing(mut self) -> Self {
        self.failing = true;
        self
    }

    /// Sets the simulated round-trip time of every call.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl ChainConnection for SandboxChain {
    async fn network_id(&self) -> Result<ChainId, BridgeError> {
        simulate_latency(self.latency).await;
        Ok(self.chain_id)
    }

    async fn balance(&self, token: &Token, _account: &Address) -> Result<Amount, BridgeError> {
        simulate_latency(self.latency).await;
        if self.failing {
            return Err(BridgeError::Rpc {
                code: -32000,
                message: "header not found".to_string(),
            });
        }
        Ok(self
            .balances
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&token.symbol)
            .cloned()
            .unwrap_or_else(Amount::zero))
    }
}

// ============================================================================
// SandboxBridge
// ============================================================================

/// In-process bridge that records submissions and issues fake hashes.
#[derive(Debug, Clone, Default)]
pub struct SandboxBridge {
    submissions: Arc<Mutex<Vec<BridgeRequest>>>,
    nonce: Arc<AtomicU64>,
    fail_with: Option<String>,
    latency: Duration,
}

impl SandboxBridge {
    /// Creates a bridge that accepts every transfer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every submission fail with `reason`.
    #[must_use]
    pub fn failing(mut self, reason: impl Into<String>) -> Self {
        self.fail_with = Some(reason.into());
        self
    }

    /// Sets the simulated round-trip time of every call.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Requests submitted so far, including failed ones.
    #[must_use]
    pub fn submissions(&self) -> Vec<BridgeRequest> {
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Bridge for SandboxBridge {
    async fn estimate_fee(&self, request: &BridgeRequest) -> Result<Amount, BridgeError> {
        simulate_latency(self.latency).await;
        let fee = request.amount.as_biguint() * SANDBOX_FEE_BPS / 10_000u64;
        Ok(Amount::from(fee))
    }

    async fn submit(&self, request: BridgeRequest) -> Result<TransferReceipt, BridgeError> {
        simulate_latency(self.latency).await;
        self.submissions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request.clone());

        if let Some(reason) = &self.fail_with {
            return Err(BridgeError::submission(reason.clone()));
        }

        let nonce = self.nonce.fetch_add(1, Ordering::Relaxed) + 1;
        Ok(TransferReceipt {
            request,
            tx_hash: B256::left_padding_from(&nonce.to_be_bytes()).to_string(),
            submitted_at: Utc::now(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
