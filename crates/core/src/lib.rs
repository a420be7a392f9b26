pub mod errors;
pub mod models;
pub mod remote;
pub mod services;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use errors::{CoreError, RecordKind};
use models::{
    chart::{ChartRange, ValuePoint},
    investment::{Investment, InvestmentDraft},
    ledger::Ledger,
    quote::{QuoteCache, QuotedPrice, SearchResult},
    settings::Settings,
    summary::{CashSummary, CategoryTotal, HoldingView, PortfolioSummary},
    transaction::{Category, Transaction, TransactionDraft},
};
use remote::finnhub::FinnhubQuoteFeed;
use remote::rest_ledger::RestLedgerStore;
use remote::traits::{LedgerStore, QuoteFeed};
use services::{
    analytics_service::AnalyticsService, chart_service::ChartService,
    ledger_service::LedgerService, quote_service::QuoteService,
    refresh_scheduler::RefreshScheduler,
};

/// Result of a `sell_investment` call that passed its confirmation gate.
///
/// The sale-recording request and the holding-deletion request are
/// independent: each arm reports its own outcome and a failure in one
/// never rolls back the other.
#[derive(Debug)]
pub struct SellReport {
    /// Id of the recorded income transaction, or why recording it failed.
    pub sale: Result<String, CoreError>,
    /// Whether the holding was removed, or why removal failed.
    pub removal: Result<(), CoreError>,
}

/// Outcome of a confirmation-gated sell operation.
#[derive(Debug)]
pub enum SellOutcome {
    /// The user declined the confirmation; nothing changed.
    Declined,
    /// Both legs of the sale were attempted; see the report.
    Settled(SellReport),
}

/// Main entry point for the Finance Tracker core engine.
///
/// Owns the canonical transaction and investment lists for the active
/// session, reconciles optimistic local mutations against the remote
/// ledger store, keeps the market quote cache fresh through a single
/// owned refresh timer, and derives every display aggregate from current
/// state.
#[must_use]
pub struct FinanceTracker {
    email: String,
    /// Live canonical state, including not-yet-confirmed mutations.
    ledger: Ledger,
    /// Last remotely confirmed state; mutations revert to this on failure.
    confirmed: Ledger,
    quote_cache: Arc<RwLock<QuoteCache>>,
    store: Arc<dyn LedgerStore>,
    ledger_service: LedgerService,
    quote_service: QuoteService,
    analytics_service: AnalyticsService,
    chart_service: ChartService,
    scheduler: RefreshScheduler,
}

impl std::fmt::Debug for FinanceTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinanceTracker")
            .field("email", &self.email)
            .field("transactions", &self.ledger.transactions.len())
            .field("investments", &self.ledger.investments.len())
            .field("refresh_running", &self.scheduler.is_running())
            .finish()
    }
}

impl FinanceTracker {
    /// Connect to the production backends described by `settings`.
    pub fn connect(email: impl Into<String>, settings: &Settings) -> Self {
        let store: Arc<dyn LedgerStore> = Arc::new(RestLedgerStore::new(settings));
        let feed: Arc<dyn QuoteFeed> =
            Arc::new(FinnhubQuoteFeed::new(settings.quote_api_key.clone()));
        Self::with_backends(email, store, feed)
    }

    /// Build a tracker over explicit backend implementations. This is the
    /// injection seam used by tests and alternative transports.
    pub fn with_backends(
        email: impl Into<String>,
        store: Arc<dyn LedgerStore>,
        feed: Arc<dyn QuoteFeed>,
    ) -> Self {
        let quote_cache = Arc::new(RwLock::new(QuoteCache::new()));
        let quote_service = QuoteService::new(feed);
        let scheduler = RefreshScheduler::new(quote_service.clone(), Arc::clone(&quote_cache));

        Self {
            email: email.into(),
            ledger: Ledger::new(),
            confirmed: Ledger::new(),
            quote_cache,
            store,
            ledger_service: LedgerService::new(),
            quote_service,
            analytics_service: AnalyticsService::new(),
            chart_service: ChartService::new(),
            scheduler,
        }
    }

    // ── Session load ────────────────────────────────────────────────

    /// Fetch both canonical lists from the remote store.
    ///
    /// Both fetches run concurrently and are applied independently: a
    /// successful list replaces its canonical counterpart wholesale
    /// (transactions re-sorted descending by date, investments as-is),
    /// while a failed list *retains* the previous snapshot. The retained-
    /// snapshot policy applies uniformly to both record kinds. The first
    /// failure (transactions before investments) is returned as the load
    /// error; recovery is a manual reload.
    pub async fn load_all(&mut self) -> Result<(), CoreError> {
        let (transactions, investments) = tokio::join!(
            self.store.fetch_transactions(&self.email),
            self.store.fetch_investments(&self.email),
        );

        let mut first_error = None;

        match transactions {
            Ok(list) => self.ledger_service.replace_transactions(&mut self.ledger, list),
            Err(e) => {
                log::warn!("transaction load failed: {e}");
                first_error = Some(CoreError::Load {
                    list: RecordKind::Transactions,
                    message: e.to_string(),
                });
            }
        }

        match investments {
            Ok(list) => self.ledger_service.replace_investments(&mut self.ledger, list),
            Err(e) => {
                log::warn!("investment load failed: {e}");
                if first_error.is_none() {
                    first_error = Some(CoreError::Load {
                        list: RecordKind::Investments,
                        message: e.to_string(),
                    });
                }
            }
        }

        self.confirmed = self.ledger.clone();
        self.scheduler.sync_holdings(self.ledger.held_symbols());

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    // ── Transactions ────────────────────────────────────────────────

    /// The canonical transaction list, descending by date.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.ledger.transactions
    }

    #[must_use]
    pub fn transaction_count(&self) -> usize {
        self.ledger.transactions.len()
    }

    /// Add a transaction: sign-normalize the draft (`Salary` stores
    /// `+|amount|`, every other category `-|amount|`), insert optimistically
    /// in date order, then persist. On a failed persist the insert is
    /// reverted to the confirmed snapshot and a mutation error is returned.
    /// Returns the new record's id.
    pub async fn add_transaction(
        &mut self,
        draft: TransactionDraft,
    ) -> Result<String, CoreError> {
        let transaction = self.ledger_service.materialize_transaction(&draft)?;
        let id = transaction.id.clone();
        self.ledger_service
            .insert_transaction(&mut self.ledger, transaction.clone());

        match self.store.create_transaction(&self.email, &transaction).await {
            Ok(()) => {
                self.commit();
                Ok(id)
            }
            Err(e) => {
                self.revert();
                Err(CoreError::mutation("save transaction", &e))
            }
        }
    }

    /// Edit a transaction in place (sign re-normalized, list re-sorted),
    /// then persist; reverts on a failed persist.
    pub async fn edit_transaction(
        &mut self,
        id: &str,
        draft: TransactionDraft,
    ) -> Result<(), CoreError> {
        let updated = self
            .ledger_service
            .edit_transaction(&mut self.ledger, id, &draft)?;

        match self.store.update_transaction(&self.email, &updated).await {
            Ok(()) => {
                self.commit();
                Ok(())
            }
            Err(e) => {
                self.revert();
                Err(CoreError::mutation("update transaction", &e))
            }
        }
    }

    /// Delete a transaction. The synchronous `confirm` gate runs before
    /// any state change or network call; declining returns `Ok(false)`
    /// with no side effects.
    pub async fn delete_transaction(
        &mut self,
        id: &str,
        confirm: impl FnOnce() -> bool,
    ) -> Result<bool, CoreError> {
        if !confirm() {
            return Ok(false);
        }

        self.ledger_service.remove_transaction(&mut self.ledger, id)?;

        match self.store.delete_transaction(&self.email, id).await {
            Ok(()) => {
                self.commit();
                Ok(true)
            }
            Err(e) => {
                self.revert();
                Err(CoreError::mutation("delete transaction", &e))
            }
        }
    }

    // ── Investments ─────────────────────────────────────────────────

    /// The canonical investment list, in remote-store order.
    #[must_use]
    pub fn investments(&self) -> &[Investment] {
        &self.ledger.investments
    }

    #[must_use]
    pub fn investment_count(&self) -> usize {
        self.ledger.investments.len()
    }

    /// Add a holding with a locally generated id, persist it, and adopt
    /// the server-issued id when the creation response carries one (the
    /// local id stays as the fallback otherwise). Returns the final id.
    pub async fn add_investment(
        &mut self,
        draft: InvestmentDraft,
    ) -> Result<String, CoreError> {
        let investment = self.ledger_service.materialize_investment(&draft)?;
        let local_id = investment.id.clone();
        self.ledger_service
            .insert_investment(&mut self.ledger, investment.clone());

        match self.store.create_investment(&self.email, &investment).await {
            Ok(server_id) => {
                let id = match server_id {
                    Some(issued) => {
                        self.ledger_service
                            .reassign_investment_id(&mut self.ledger, &local_id, issued.clone())?;
                        issued
                    }
                    None => local_id,
                };
                self.commit();
                self.sync_refresh_timer();
                Ok(id)
            }
            Err(e) => {
                self.revert();
                Err(CoreError::mutation("add investment", &e))
            }
        }
    }

    /// Edit a holding in place, then persist; reverts on a failed persist.
    pub async fn edit_investment(
        &mut self,
        id: &str,
        draft: InvestmentDraft,
    ) -> Result<(), CoreError> {
        let updated = self
            .ledger_service
            .edit_investment(&mut self.ledger, id, &draft)?;

        match self.store.update_investment(&self.email, &updated).await {
            Ok(()) => {
                self.commit();
                self.sync_refresh_timer();
                Ok(())
            }
            Err(e) => {
                self.revert();
                Err(CoreError::mutation("update investment", &e))
            }
        }
    }

    /// Delete a holding behind the synchronous confirmation gate;
    /// declining returns `Ok(false)` with no side effects.
    pub async fn delete_investment(
        &mut self,
        id: &str,
        confirm: impl FnOnce() -> bool,
    ) -> Result<bool, CoreError> {
        if !confirm() {
            return Ok(false);
        }
        self.remove_investment_confirmed(id).await?;
        Ok(true)
    }

    /// Sell a holding: record the sale proceeds (`price × shares`) as a
    /// `Salary` transaction dated today, then delete the holding.
    ///
    /// Requires an available quote for the symbol. The two remote requests
    /// are independent; each failure is reported in its own arm of the
    /// [`SellReport`] and does not roll back the other leg (each leg still
    /// reverts its *own* optimistic change on its own failure).
    pub async fn sell_investment(
        &mut self,
        id: &str,
        confirm: impl FnOnce() -> bool,
    ) -> Result<SellOutcome, CoreError> {
        let investment = self
            .ledger
            .investments
            .iter()
            .find(|inv| inv.id == id)
            .cloned()
            .ok_or_else(|| CoreError::NotFound(id.to_string()))?;

        let price = self
            .quote_cache
            .read()
            .await
            .quote(&investment.symbol)
            .price()
            .ok_or_else(|| CoreError::QuoteUnavailable {
                symbol: investment.symbol.clone(),
            })?;

        if !confirm() {
            return Ok(SellOutcome::Declined);
        }

        let proceeds = price * investment.shares;
        let today = Utc::now().date_naive();
        let sale = self
            .add_transaction(TransactionDraft::new(proceeds, Category::Salary, today))
            .await;
        if let Err(e) = &sale {
            log::warn!("sale of {} recorded no income transaction: {e}", investment.symbol);
        }

        let removal = self.remove_investment_confirmed(&investment.id).await;
        if let Err(e) = &removal {
            log::warn!("sold holding {} was not removed: {e}", investment.symbol);
        }

        Ok(SellOutcome::Settled(SellReport { sale, removal }))
    }

    // ── Quotes & search ─────────────────────────────────────────────

    /// Run one refresh cycle immediately over the currently held symbols
    /// and replace the cache with the resulting snapshot. No-op when
    /// nothing is held.
    pub async fn refresh_quotes(&self) {
        let symbols = self.ledger.held_symbols();
        if symbols.is_empty() {
            return;
        }
        let snapshot = self.quote_service.refresh_cycle(&symbols).await;
        *self.quote_cache.write().await = snapshot;
    }

    /// A snapshot of the current quote cache.
    pub async fn quotes(&self) -> QuoteCache {
        self.quote_cache.read().await.clone()
    }

    /// The cached price for one symbol (`Unavailable` before any refresh).
    pub async fn quote(&self, symbol: &str) -> QuotedPrice {
        self.quote_cache.read().await.quote(symbol)
    }

    /// When the last refresh cycle completed, if one has run.
    pub async fn last_quote_refresh(&self) -> Option<DateTime<Utc>> {
        self.quote_cache.read().await.refreshed_at
    }

    /// Search the quote feed for symbols, enriching every hit with a
    /// bounded per-symbol quote lookup.
    pub async fn search_stocks(&self, query: &str) -> Result<Vec<SearchResult>, CoreError> {
        self.quote_service.search_with_quotes(query).await
    }

    /// Whether the periodic quote refresh timer is currently running.
    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.scheduler.is_running()
    }

    // ── Aggregates ──────────────────────────────────────────────────

    /// Income / expenses / net balance over all transactions.
    #[must_use]
    pub fn cash_summary(&self) -> CashSummary {
        self.analytics_service.cash_summary(&self.ledger.transactions)
    }

    /// Absolute expense totals per category, in first-occurrence order.
    #[must_use]
    pub fn category_breakdown(&self) -> Vec<CategoryTotal> {
        self.analytics_service
            .category_breakdown(&self.ledger.transactions)
    }

    /// Every holding joined with its current quote.
    pub async fn holding_views(&self) -> Vec<HoldingView> {
        let cache = self.quote_cache.read().await;
        self.analytics_service
            .holding_views(&self.ledger.investments, &cache)
    }

    /// Portfolio totals: invested, current value, and unrealized P/L.
    pub async fn portfolio_summary(&self) -> PortfolioSummary {
        let cache = self.quote_cache.read().await;
        self.analytics_service
            .portfolio_summary(&self.ledger.investments, &cache)
    }

    /// The portfolio value-over-time series, optionally narrowed to a
    /// display range. A `None` range passes the whole series through.
    pub async fn value_over_time(&self, range: Option<ChartRange>) -> Vec<ValuePoint> {
        let today = Utc::now().date_naive();
        let cache = self.quote_cache.read().await;
        let series = self
            .chart_service
            .value_over_time(&self.ledger.investments, &cache, today);
        self.chart_service.filter_range(&series, range, today)
    }

    // ── Teardown ────────────────────────────────────────────────────

    /// Stop the quote refresh timer. Called on view teardown; the timer
    /// is also aborted if the tracker is dropped.
    pub fn shutdown(&mut self) {
        self.scheduler.stop();
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Remove a holding whose deletion has already been confirmed (or is
    /// part of a sell), persisting and reverting on failure.
    async fn remove_investment_confirmed(&mut self, id: &str) -> Result<(), CoreError> {
        self.ledger_service.remove_investment(&mut self.ledger, id)?;

        match self.store.delete_investment(&self.email, id).await {
            Ok(()) => {
                self.commit();
                self.sync_refresh_timer();
                Ok(())
            }
            Err(e) => {
                self.revert();
                Err(CoreError::mutation("delete investment", &e))
            }
        }
    }

    /// Make the live state the new confirmed snapshot.
    fn commit(&mut self) {
        self.confirmed = self.ledger.clone();
    }

    /// Discard unconfirmed local changes, restoring the confirmed snapshot.
    fn revert(&mut self) {
        self.ledger = self.confirmed.clone();
    }

    /// Reconcile the refresh timer with the current held-symbol set.
    fn sync_refresh_timer(&mut self) {
        self.scheduler.sync_holdings(self.ledger.held_symbols());
    }
}
