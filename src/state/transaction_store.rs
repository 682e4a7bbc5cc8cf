//! Process-wide holder of the transfer awaiting confirmation.

use crate::domain::PendingTransaction;

/// Owns the one [`PendingTransaction`] the confirmation screen works on.
///
/// The transfer form fills it, a successful submission clears it. The route
/// guard in the app redirects away from the confirmation screen whenever it
/// is empty.
#[derive(Debug, Default)]
pub struct TransactionStore {
    current: Option<PendingTransaction>,
}

impl TransactionStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pending transaction, if any.
    #[must_use]
    pub fn get(&self) -> Option<&PendingTransaction> {
        self.current.as_ref()
    }

    /// Replaces the pending transaction.
    pub fn set(&mut self, transaction: PendingTransaction) {
        self.current = Some(transaction);
    }

    /// Removes and returns the pending transaction.
    pub fn take(&mut self) -> Option<PendingTransaction> {
        self.current.take()
    }

    /// Drops the pending transaction.
    pub fn clear(&mut self) {
        self.current = None;
    }

    /// Returns `true` if no transaction is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_none()
    }
}
