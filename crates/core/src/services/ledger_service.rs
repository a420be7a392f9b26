use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::investment::{Investment, InvestmentDraft};
use crate::models::ledger::Ledger;
use crate::models::transaction::{Transaction, TransactionDraft};

/// Local mutations over the canonical record sets.
///
/// Pure list logic — no I/O. The facade pairs each of these with a remote
/// persist request and rolls back against its confirmed snapshot when the
/// request fails.
pub struct LedgerService;

impl LedgerService {
    pub fn new() -> Self {
        Self
    }

    // ── Transactions ────────────────────────────────────────────────

    /// Replace the whole transaction list (initial load), re-sorted
    /// descending by date. Ties keep their incoming relative order.
    pub fn replace_transactions(&self, ledger: &mut Ledger, mut transactions: Vec<Transaction>) {
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        ledger.transactions = transactions;
    }

    /// Materialize a draft into a transaction with a normalized sign and a
    /// fresh unique id.
    pub fn materialize_transaction(
        &self,
        draft: &TransactionDraft,
    ) -> Result<Transaction, CoreError> {
        self.validate_amount(draft.amount)?;
        Ok(Transaction {
            id: Uuid::new_v4().to_string(),
            amount: draft.signed_amount(),
            category: draft.category,
            date: draft.date,
        })
    }

    /// Insert a transaction keeping descending-date order (O(log n) search).
    pub fn insert_transaction(&self, ledger: &mut Ledger, transaction: Transaction) {
        let pos = ledger
            .transactions
            .binary_search_by(|probe| probe.date.cmp(&transaction.date).reverse())
            .unwrap_or_else(|pos| pos);
        ledger.transactions.insert(pos, transaction);
    }

    /// Apply an edit: replace the identified record's amount/category/date
    /// (sign re-normalized) and restore descending-date order.
    pub fn edit_transaction(
        &self,
        ledger: &mut Ledger,
        id: &str,
        draft: &TransactionDraft,
    ) -> Result<Transaction, CoreError> {
        self.validate_amount(draft.amount)?;
        let idx = ledger
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        let updated = Transaction {
            id: ledger.transactions[idx].id.clone(),
            amount: draft.signed_amount(),
            category: draft.category,
            date: draft.date,
        };
        ledger.transactions.remove(idx);
        self.insert_transaction(ledger, updated.clone());
        Ok(updated)
    }

    /// Remove a transaction by id, returning the removed record.
    pub fn remove_transaction(
        &self,
        ledger: &mut Ledger,
        id: &str,
    ) -> Result<Transaction, CoreError> {
        let idx = ledger
            .transactions
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
        Ok(ledger.transactions.remove(idx))
    }

    // ── Investments ─────────────────────────────────────────────────

    /// Replace the whole investment list (initial load), kept as-is.
    pub fn replace_investments(&self, ledger: &mut Ledger, investments: Vec<Investment>) {
        ledger.investments = investments;
    }

    /// Materialize a draft into a holding with a locally generated id.
    /// The id may be swapped for a server-issued one after creation.
    pub fn materialize_investment(
        &self,
        draft: &InvestmentDraft,
    ) -> Result<Investment, CoreError> {
        self.validate_investment(draft)?;
        Ok(Investment {
            id: Uuid::new_v4().to_string(),
            symbol: draft.symbol.to_uppercase(),
            shares: draft.shares,
            purchase_price: draft.purchase_price,
            purchase_date: draft.purchase_date,
        })
    }

    /// Append a holding to the canonical list.
    pub fn insert_investment(&self, ledger: &mut Ledger, investment: Investment) {
        ledger.investments.push(investment);
    }

    /// Splice-edit the identified holding in place, preserving its id and
    /// list position.
    pub fn edit_investment(
        &self,
        ledger: &mut Ledger,
        id: &str,
        draft: &InvestmentDraft,
    ) -> Result<Investment, CoreError> {
        self.validate_investment(draft)?;
        let holding = ledger
            .investments
            .iter_mut()
            .find(|inv| inv.id == id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        holding.symbol = draft.symbol.to_uppercase();
        holding.shares = draft.shares;
        holding.purchase_price = draft.purchase_price;
        holding.purchase_date = draft.purchase_date;
        Ok(holding.clone())
    }

    /// Remove a holding by id, returning the removed record.
    pub fn remove_investment(
        &self,
        ledger: &mut Ledger,
        id: &str,
    ) -> Result<Investment, CoreError> {
        let idx = ledger
            .investments
            .iter()
            .position(|inv| inv.id == id)
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;
        Ok(ledger.investments.remove(idx))
    }

    /// Rewrite a holding's id (server-issued id replacing the local one).
    pub fn reassign_investment_id(
        &self,
        ledger: &mut Ledger,
        old_id: &str,
        new_id: String,
    ) -> Result<(), CoreError> {
        let holding = ledger
            .investments
            .iter_mut()
            .find(|inv| inv.id == old_id)
            .ok_or_else(|| CoreError::NotFound(old_id.to_string()))?;
        holding.id = new_id;
        Ok(())
    }

    // ── Validation ──────────────────────────────────────────────────

    fn validate_amount(&self, amount: f64) -> Result<(), CoreError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(CoreError::Validation(
                "Transaction amount must be a positive number".into(),
            ));
        }
        Ok(())
    }

    fn validate_investment(&self, draft: &InvestmentDraft) -> Result<(), CoreError> {
        if draft.symbol.trim().is_empty() {
            return Err(CoreError::Validation("Symbol must not be empty".into()));
        }
        if !draft.shares.is_finite() || draft.shares <= 0.0 {
            return Err(CoreError::Validation(
                "Share count must be a positive number".into(),
            ));
        }
        if !draft.purchase_price.is_finite() || draft.purchase_price <= 0.0 {
            return Err(CoreError::Validation(
                "Purchase price must be a positive number".into(),
            ));
        }
        Ok(())
    }
}

impl Default for LedgerService {
    fn default() -> Self {
        Self::new()
    }
}
