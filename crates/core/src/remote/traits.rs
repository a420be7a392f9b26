use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::investment::Investment;
use crate::models::quote::{Quote, SymbolMatch};
use crate::models::transaction::Transaction;

/// The remote ledger store holding a user's transactions and investments.
///
/// The engine only ever talks to the store through this trait; the
/// production implementation is a REST client, tests substitute mocks.
/// All mutations are keyed by the user's email and acknowledged without a
/// body (except investment creation, which may issue an id).
#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn fetch_transactions(&self, email: &str) -> Result<Vec<Transaction>, CoreError>;

    async fn create_transaction(
        &self,
        email: &str,
        transaction: &Transaction,
    ) -> Result<(), CoreError>;

    async fn update_transaction(
        &self,
        email: &str,
        transaction: &Transaction,
    ) -> Result<(), CoreError>;

    async fn delete_transaction(&self, email: &str, id: &str) -> Result<(), CoreError>;

    async fn fetch_investments(&self, email: &str) -> Result<Vec<Investment>, CoreError>;

    /// Create an investment. Returns the server-issued id, if the response
    /// carries one; callers fall back to their locally generated id otherwise.
    async fn create_investment(
        &self,
        email: &str,
        investment: &Investment,
    ) -> Result<Option<String>, CoreError>;

    async fn update_investment(
        &self,
        email: &str,
        investment: &Investment,
    ) -> Result<(), CoreError>;

    async fn delete_investment(&self, email: &str, id: &str) -> Result<(), CoreError>;
}

/// A live market quote service: free-text symbol search plus per-symbol
/// current quotes.
#[async_trait]
pub trait QuoteFeed: Send + Sync {
    /// Human-readable name of this feed (for logs/errors).
    fn name(&self) -> &str;

    /// Search for symbols matching a free-text query.
    async fn search(&self, query: &str) -> Result<Vec<SymbolMatch>, CoreError>;

    /// Fetch the current quote for one symbol. An empty/zero quote from the
    /// feed is an error, not a zero price.
    async fn quote(&self, symbol: &str) -> Result<Quote, CoreError>;
}
