use serde::{Deserialize, Serialize};

use super::investment::Investment;
use super::transaction::Transaction;

/// The canonical in-memory record sets for the active session.
///
/// The facade owns the only live `Ledger`; every other component reads it
/// through the facade or receives slices of it. Transactions are kept in
/// descending date order; investments keep remote-store order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    pub transactions: Vec<Transaction>,
    pub investments: Vec<Investment>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct held symbols in sorted order, for quote refresh cycles.
    pub fn held_symbols(&self) -> std::collections::BTreeSet<String> {
        self.investments
            .iter()
            .map(|inv| inv.symbol.to_uppercase())
            .collect()
    }
}
