//! Wallet, chain and bridge handles chosen at startup.

use std::collections::HashMap;

use color_eyre::Result;

use super::config::{AppConfig, WalletConfig};
use crate::client::sandbox::SANDBOX_ACCOUNT;
use crate::client::{
    ChainBackend, RpcChain, RpcWallet, SandboxBridge, SandboxChain, SandboxWallet, WalletBackend,
};
use crate::domain::{Address, parse_units};

/// Balance every sandbox token starts with on the first configured chain.
const SANDBOX_HOME_BALANCE: &str = "2.5";

/// Balance every sandbox token starts with on the other chains.
const SANDBOX_AWAY_BALANCE: &str = "1";

/// The capability implementations the app talks to.
#[derive(Debug, Clone)]
pub struct Backends {
    /// The user's wallet.
    pub wallet: WalletBackend,
    chains: HashMap<String, ChainBackend>,
    /// The bridge transfers are submitted to.
    pub bridge: SandboxBridge,
}

impl Backends {
    /// Builds backends from the configuration.
    ///
    /// `force_sandbox` overrides the configured wallet mode.
    ///
    /// # Errors
    ///
    /// Returns an error if an RPC client cannot be created.
    pub fn from_config(config: &AppConfig, force_sandbox: bool) -> Result<Self> {
        match &config.wallet {
            WalletConfig::Rpc { url } if !force_sandbox => {
                tracing::info!("using RPC wallet at {url}");
                let chains = config
                    .chains
                    .iter()
                    .map(|chain| Ok((chain.key.clone(), ChainBackend::Rpc(RpcChain::connect(chain)?))))
                    .collect::<Result<HashMap<_, _>>>()?;
                Ok(Self {
                    wallet: WalletBackend::Rpc(RpcWallet::connect(url)?),
                    chains,
                    bridge: SandboxBridge::new().with_latency(config.sandbox_latency()),
                })
            }
            _ => Ok(Self::sandbox(config)),
        }
    }

    /// In-process backends seeded with demo balances.
    ///
    /// The wallet starts connected to the first configured chain.
    #[must_use]
    pub fn sandbox(config: &AppConfig) -> Self {
        tracing::info!("using sandbox backends");
        let latency = config.sandbox_latency();
        let account = Address::parse(SANDBOX_ACCOUNT).ok();
        let home = config.chains.first().map(|chain| chain.chain_id);

        let chains = config
            .chains
            .iter()
            .enumerate()
            .map(|(index, chain)| {
                let seed = if index == 0 {
                    SANDBOX_HOME_BALANCE
                } else {
                    SANDBOX_AWAY_BALANCE
                };
                let sandbox = config.tokens_on(&chain.key).into_iter().fold(
                    SandboxChain::new(chain.chain_id).with_latency(latency),
                    |sandbox, token| {
                        let amount = parse_units(seed, token.decimals).unwrap_or_default();
                        sandbox.with_balance(&token.symbol, amount)
                    },
                );
                (chain.key.clone(), ChainBackend::Sandbox(sandbox))
            })
            .collect();

        Self {
            wallet: WalletBackend::Sandbox(SandboxWallet::new(account, home).with_latency(latency)),
            chains,
            bridge: SandboxBridge::new().with_latency(latency),
        }
    }

    /// Assembles backends from parts.
    #[must_use]
    pub fn new(
        wallet: WalletBackend,
        chains: HashMap<String, ChainBackend>,
        bridge: SandboxBridge,
    ) -> Self {
        Self {
            wallet,
            chains,
            bridge,
        }
    }

    /// Connection for the chain with `key`.
    #[must_use]
    pub fn chain(&self, key: &str) -> Option<&ChainBackend> {
        self.chains.get(key)
    }
}
