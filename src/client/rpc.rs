//! JSON-RPC backed chain connections and wallet.
//!
//! [`RpcChain`] queries a chain's public RPC endpoint. [`RpcWallet`] talks to a
//! wallet that exposes EIP-1193 methods over HTTP (for example a desktop
//! wallet's local RPC port); since HTTP cannot push, its connected network is
//! polled by [`RpcWallet::watch_network`] and published on a watch channel.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use alloy::providers::{DynProvider, Provider};
use alloy::sol;
use serde_json::{Value, json};
use tokio::sync::watch;

use super::http::connect_http;
use super::{ChainConnection, WalletProvider};
use crate::domain::{Address, Amount, BridgeError, ChainDescriptor, ChainId, Token};

sol! {
    #[sol(rpc)]
    interface IERC20 {
        function balanceOf(address owner) external view returns (uint256);
    }
}

// ============================================================================
// RpcChain
// ============================================================================

/// A chain reached through its JSON-RPC endpoint.
#[derive(Clone)]
pub struct RpcChain {
    provider: DynProvider,
    url: String,
}

impl RpcChain {
    /// Connects to the chain's configured RPC URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be
    /// built.
    pub fn connect(chain: &ChainDescriptor) -> Result<Self, BridgeError> {
        Ok(Self {
            provider: connect_http(&chain.rpc_url)?,
            url: chain.rpc_url.clone(),
        })
    }
}

impl fmt::Debug for RpcChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcChain").field("url", &self.url).finish_non_exhaustive()
    }
}

impl ChainConnection for RpcChain {
    async fn network_id(&self) -> Result<ChainId, BridgeError> {
        let id = self.provider.get_chain_id().await?;
        Ok(ChainId(id))
    }

    async fn balance(&self, token: &Token, account: &Address) -> Result<Amount, BridgeError> {
        tracing::debug!("{} balance of {account} via {}", token.symbol, self.url);
        let raw = match &token.address {
            None => self.provider.get_balance(account.inner()).await?,
            Some(contract) => {
                IERC20::new(contract.inner(), self.provider.clone())
                    .balanceOf(account.inner())
                    .call()
                    .await?
            }
        };
        Ok(Amount::from(raw))
    }
}

// ============================================================================
// RpcWallet
// ============================================================================

/// A wallet exposing EIP-1193 methods over HTTP.
#[derive(Clone)]
pub struct RpcWallet {
    provider: DynProvider,
    url: String,
    network_tx: Arc<watch::Sender<Option<ChainId>>>,
}

impl RpcWallet {
    /// Creates a wallet client for `url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid or the HTTP client cannot be
    /// built.
    pub fn connect(url: &str) -> Result<Self, BridgeError> {
        let (network_tx, _) = watch::channel(None);
        Ok(Self {
            provider: connect_http(url)?,
            url: url.to_string(),
            network_tx: Arc::new(network_tx),
        })
    }

    /// Polls the connected network every `interval` and publishes changes.
    ///
    /// Runs until the task is dropped.
    pub async fn watch_network(self, interval: Duration) {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let current = match self.connected_network().await {
                Ok(current) => current,
                Err(e) => {
                    tracing::warn!("wallet network poll failed: {e}");
                    None
                }
            };
            self.publish(current);
        }
    }

    fn publish(&self, network: Option<ChainId>) {
        self.network_tx.send_if_modified(|value| {
            if *value == network {
                false
            } else {
                tracing::info!("wallet network changed: {value:?} -> {network:?}");
                *value = network;
                true
            }
        });
    }
}

impl fmt::Debug for RpcWallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RpcWallet").field("url", &self.url).finish_non_exhaustive()
    }
}

impl WalletProvider for RpcWallet {
    async fn connected_account(&self) -> Result<Address, BridgeError> {
        let accounts = self.provider.get_accounts().await?;
        accounts
            .first()
            .copied()
            .map(Address::from)
            .ok_or(BridgeError::NotConnected)
    }

    async fn connected_network(&self) -> Result<Option<ChainId>, BridgeError> {
        match self.provider.get_chain_id().await.map_err(BridgeError::from) {
            Ok(id) => Ok(Some(ChainId(id))),
            // An unreachable wallet counts as no connected provider
            Err(BridgeError::Transport(e)) => {
                tracing::debug!("wallet unreachable: {e}");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn change_network(&self, chain: &ChainDescriptor) -> Result<(), BridgeError> {
        let params = [json!({ "chainId": chain.chain_id.to_hex() })];
        self.provider
            .raw_request::<_, Option<Value>>("wallet_switchEthereumChain".into(), params)
            .await?;
        self.publish(Some(chain.chain_id));
        Ok(())
    }

    fn subscribe(&self) -> watch::Receiver<Option<ChainId>> {
        self.network_tx.subscribe()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::U256;
    use alloy::sol_types::SolCall;

    const ACCOUNT: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

    #[test]
    fn test_balance_of_call_encoding() {
        let account = Address::parse(ACCOUNT).unwrap();
        let data = IERC20::balanceOfCall {
            owner: account.inner(),
        }
        .abi_encode();

        assert_eq!(data.len(), 4 + 32);
        assert_eq!(data[..4], [0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(&data[16..], account.inner().as_slice());
    }

    #[test]
    fn test_balance_of_return_decoding() {
        let encoded = U256::from(1_500_000u64).to_be_bytes::<32>();
        let decoded = IERC20::balanceOfCall::abi_decode_returns(&encoded).unwrap();
        assert_eq!(Amount::from(decoded), Amount::from(1_500_000u64));
    }

    #[test]
    fn test_debug_shows_url() {
        let wallet = RpcWallet::connect("http://127.0.0.1:1248").unwrap();
        assert_eq!(
            format!("{wallet:?}"),
            "RpcWallet { url: \"http://127.0.0.1:1248\", .. }"
        );
    }

    #[tokio::test]
    async fn test_publish_only_notifies_on_change() {
        let wallet = RpcWallet::connect("http://127.0.0.1:1248").unwrap();
        let mut rx = wallet.subscribe();
        assert_eq!(*rx.borrow(), None);

        wallet.publish(Some(ChainId(1)));
        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), Some(ChainId(1)));

        wallet.publish(Some(ChainId(1)));
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test]
    async fn test_unreachable_wallet_has_no_network() {
        let wallet = RpcWallet::connect("http://127.0.0.1:9").unwrap();
        assert_eq!(wallet.connected_network().await.unwrap(), None);
    }
}
