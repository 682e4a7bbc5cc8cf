//! Data fetched from the wallet, the chains and the bridge.

use std::collections::HashMap;

use crate::domain::{Address, Amount, AsyncValue, ChainId, Token, TransferReceipt};

/// Data the views render, as loaded so far.
#[derive(Debug, Default)]
pub struct DataState {
    /// Connected wallet account.
    pub account: AsyncValue<Address>,
    /// Chain the wallet is connected to, if any.
    pub connected_network: Option<ChainId>,
    /// Balances keyed by `(chain key, token symbol)`.
    balances: HashMap<(String, String), AsyncValue<Amount>>,
    /// Submitted transfers, newest first.
    pub activity: Vec<TransferReceipt>,
}

impl DataState {
    /// Creates empty data state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Balance of `symbol` on `chain_key`, if one was ever requested.
    #[must_use]
    pub fn balance(&self, chain_key: &str, symbol: &str) -> Option<&AsyncValue<Amount>> {
        self.balances
            .get(&(chain_key.to_string(), symbol.to_string()))
    }

    /// Stores a balance state.
    pub fn set_balance(&mut self, chain_key: &str, symbol: &str, balance: AsyncValue<Amount>) {
        self.balances
            .insert((chain_key.to_string(), symbol.to_string()), balance);
    }

    /// Moves a balance into its refreshing state.
    pub fn mark_balance_refreshing(&mut self, chain_key: &str, symbol: &str) {
        let key = (chain_key.to_string(), symbol.to_string());
        let current = self.balances.remove(&key).unwrap_or_default();
        self.balances.insert(key, current.into_refreshing());
    }

    /// Attaches the known balances to `tokens` on `chain_key`.
    #[must_use]
    pub fn with_balances(&self, chain_key: &str, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .map(|mut token| {
                token.balance = self.balance(chain_key, &token.symbol).cloned();
                token
            })
            .collect()
    }

    /// Records a submitted transfer.
    pub fn push_receipt(&mut self, receipt: TransferReceipt) {
        self.activity.insert(0, receipt);
    }
}
