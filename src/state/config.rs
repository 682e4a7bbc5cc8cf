//! Application configuration with persistence.
//!
//! The configuration file is stored at:
//! - Linux: `~/.config/tokenbridge/config.json`
//! - macOS: `~/Library/Application Support/tokenbridge/config.json`
//! - Windows: `%APPDATA%/tokenbridge/config.json`
//!
//! A missing or unreadable file yields the defaults: Ethereum and Polygon
//! mainnet, ETH and USDC, and the sandbox wallet.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use alloy::primitives::address;
use color_eyre::Result;
use color_eyre::eyre::bail;
use serde::{Deserialize, Serialize};

use super::platform::paths;
use crate::constants::DEFAULT_POLL_INTERVAL_SECS;
use crate::domain::{Address, ChainDescriptor, Token};

// ============================================================================
// Constants
// ============================================================================

/// Largest decimals value an amount can be formatted with.
const MAX_TOKEN_DECIMALS: u8 = 77;

// ============================================================================
// Wallet & Token Configuration
// ============================================================================

/// Which wallet the app talks to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum WalletConfig {
    /// In-process wallet with a fixed account.
    #[default]
    Sandbox,
    /// Wallet exposing EIP-1193 methods over HTTP.
    Rpc {
        /// Wallet RPC endpoint, e.g. `http://127.0.0.1:1248`.
        url: String,
    },
}

/// A token and where it lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Ticker symbol.
    pub symbol: String,
    /// Decimals of the smallest unit.
    pub decimals: u8,
    /// Logo reference.
    #[serde(default)]
    pub logo_uri: Option<String>,
    /// Chain keys on which this token is the native asset.
    #[serde(default)]
    pub native_on: Vec<String>,
    /// Contract address per chain key.
    #[serde(default)]
    pub addresses: BTreeMap<String, Address>,
}

impl TokenConfig {
    /// Returns the token as it exists on `chain_key`, if it does.
    #[must_use]
    pub fn on_chain(&self, chain_key: &str) -> Option<Token> {
        let address = if self.native_on.iter().any(|key| key == chain_key) {
            None
        } else {
            Some(self.addresses.get(chain_key)?.clone())
        };
        Some(Token {
            symbol: self.symbol.clone(),
            decimals: self.decimals,
            logo_uri: self.logo_uri.clone(),
            address,
            balance: None,
        })
    }
}

// ============================================================================
// AppConfig
// ============================================================================

/// Application configuration structure for persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Chains available as transfer source and destination.
    #[serde(default = "default_chains")]
    pub chains: Vec<ChainDescriptor>,
    /// Tokens shown on the home screen.
    #[serde(default = "default_tokens")]
    pub tokens: Vec<TokenConfig>,
    /// Wallet backend.
    #[serde(default)]
    pub wallet: WalletConfig,
    /// How often an RPC wallet's network is polled.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    /// Simulated latency of sandbox calls.
    #[serde(default)]
    pub sandbox_latency_ms: u64,
}

fn default_poll_interval_secs() -> u64 {
    DEFAULT_POLL_INTERVAL_SECS
}

fn default_chains() -> Vec<ChainDescriptor> {
    vec![
        ChainDescriptor::new(
            "ethereum",
            "Ethereum",
            1,
            "https://ethereum-rpc.publicnode.com",
        )
        .with_explorer("https://etherscan.io"),
        ChainDescriptor::new("polygon", "Polygon", 137, "https://polygon-rpc.com")
            .with_explorer("https://polygonscan.com"),
    ]
}

fn default_tokens() -> Vec<TokenConfig> {
    let eth_addresses = BTreeMap::from([(
        "polygon".to_string(),
        Address::from(address!("0x7ceB23fD6bC0adD59E62ac25578270cFf1b9f619")),
    )]);
    let usdc_addresses = BTreeMap::from([
        (
            "ethereum".to_string(),
            Address::from(address!("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48")),
        ),
        (
            "polygon".to_string(),
            Address::from(address!("0x3c499c542cEF5E3811e1192ce70d8cC03d5c3359")),
        ),
    ]);

    vec![
        TokenConfig {
            symbol: "ETH".to_string(),
            decimals: 18,
            logo_uri: None,
            native_on: vec!["ethereum".to_string()],
            addresses: eth_addresses,
        },
        TokenConfig {
            symbol: "USDC".to_string(),
            decimals: 6,
            logo_uri: None,
            native_on: Vec::new(),
            addresses: usdc_addresses,
        },
    ]
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            chains: default_chains(),
            tokens: default_tokens(),
            wallet: WalletConfig::default(),
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            sandbox_latency_ms: 0,
        }
    }
}

impl AppConfig {
    /// Returns the default path to the configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        paths::config_file()
    }

    /// Loads the configuration from `path` (or the default location),
    /// falling back to defaults if it is missing or invalid.
    #[must_use]
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path.map(Path::to_path_buf).map_or_else(Self::config_path, Ok) {
            Ok(path) => path,
            Err(err) => {
                tracing::warn!("{err}; using default config");
                return Self::default();
            }
        };

        match Self::try_load(&path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Config load from {} failed, using defaults: {err}", path.display());
                Self::default()
            }
        }
    }

    /// Loads and validates the configuration at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails
    /// [`AppConfig::validate`].
    pub fn try_load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Checks the configuration for mistakes the app cannot work around.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty chain list, duplicate chain keys, or
    /// tokens with more decimals than an amount can be formatted with.
    pub fn validate(&self) -> Result<()> {
        if self.chains.is_empty() {
            bail!("at least one chain must be configured");
        }
        let mut keys = HashSet::new();
        for chain in &self.chains {
            if !keys.insert(chain.key.as_str()) {
                bail!("chain '{}' is configured twice", chain.key);
            }
        }
        if let Some(token) = self.tokens.iter().find(|t| t.decimals > MAX_TOKEN_DECIMALS) {
            bail!(
                "token '{}' has {} decimals, at most {MAX_TOKEN_DECIMALS} are supported",
                token.symbol,
                token.decimals
            );
        }
        Ok(())
    }

    /// Looks up a chain by key.
    #[must_use]
    pub fn chain(&self, key: &str) -> Option<&ChainDescriptor> {
        self.chains.iter().find(|chain| chain.key == key)
    }

    /// Tokens available on `chain_key`, without balances.
    #[must_use]
    pub fn tokens_on(&self, chain_key: &str) -> Vec<Token> {
        self.tokens
            .iter()
            .filter_map(|token| token.on_chain(chain_key))
            .collect()
    }

    /// Chains other than `chain_key`, in configured order.
    #[must_use]
    pub fn destinations_from(&self, chain_key: &str) -> Vec<ChainDescriptor> {
        self.chains
            .iter()
            .filter(|chain| chain.key != chain_key)
            .cloned()
            .collect()
    }

    /// RPC wallet polling interval.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    /// Simulated sandbox latency.
    #[must_use]
    pub fn sandbox_latency(&self) -> Duration {
        Duration::from_millis(self.sandbox_latency_ms)
    }
}

// ============================================================================
// Tests
// ============================================================================
