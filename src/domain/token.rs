//! Tokens and their display rules.

use super::{Address, Amount, AsyncValue};
use crate::constants::{ALTERNATE_NATIVE_SYMBOL, NATIVE_SYMBOL, PRIMARY_CHAIN};

// ============================================================================
// Token
// ============================================================================

/// A token on a specific chain, with its (possibly loading) balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Ticker symbol (e.g. `ETH`, `USDC`).
    pub symbol: String,
    /// Number of decimals of the smallest unit.
    pub decimals: u8,
    /// Logo reference, kept for display.
    pub logo_uri: Option<String>,
    /// Contract address on this chain; `None` for the chain's native asset.
    pub address: Option<Address>,
    /// Balance of the connected account, absent until first requested.
    pub balance: Option<AsyncValue<Amount>>,
}

impl Token {
    /// Creates a native-asset token without a balance.
    #[must_use]
    pub fn native(symbol: impl Into<String>, decimals: u8) -> Self {
        Self {
            symbol: symbol.into(),
            decimals,
            logo_uri: None,
            address: None,
            balance: None,
        }
    }

    /// Creates a contract token without a balance.
    #[must_use]
    pub fn erc20(symbol: impl Into<String>, decimals: u8, address: Address) -> Self {
        Self {
            address: Some(address),
            ..Self::native(symbol, decimals)
        }
    }

    /// Sets the balance.
    #[must_use]
    pub fn with_balance(mut self, balance: AsyncValue<Amount>) -> Self {
        self.balance = Some(balance);
        self
    }

    /// Returns `true` for the chain's native asset.
    #[must_use]
    pub const fn is_native(&self) -> bool {
        self.address.is_none()
    }

    /// Returns the symbol to show next to an amount on the given chain.
    #[must_use]
    pub fn display_symbol(&self, chain_key: &str) -> &str {
        display_symbol(chain_key, &self.symbol)
    }

    /// Short glyph standing in for the token logo.
    #[must_use]
    pub fn glyph(&self) -> String {
        let initials: String = self.symbol.chars().take(3).collect();
        format!("({initials})")
    }

    /// Returns a copy without the balance, as carried in transfer requests.
    #[must_use]
    pub fn without_balance(&self) -> Self {
        Self {
            balance: None,
            ..self.clone()
        }
    }
}

/// Applies the native-asset rebranding rule.
///
/// Off the primary chain the native symbol is shown as the alternate symbol;
/// every other symbol is shown unchanged.
#[must_use]
pub fn display_symbol<'a>(chain_key: &str, symbol: &'a str) -> &'a str {
    if chain_key != PRIMARY_CHAIN && symbol == NATIVE_SYMBOL {
        ALTERNATE_NATIVE_SYMBOL
    } else {
        symbol
    }
}

// ============================================================================
// Tests
// ============================================================================
