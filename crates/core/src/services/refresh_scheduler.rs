use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::models::quote::QuoteCache;
use crate::services::quote_service::QuoteService;

/// How often held symbols are re-quoted while the investment view is active.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

/// Owns the periodic quote refresh for the currently held symbols.
///
/// At most one timer task exists at a time: re-syncing with a changed
/// symbol set cancels and replaces the running task, never stacks a second
/// one. Each (re)start refreshes immediately, then on the fixed interval.
/// The shared cache is only ever replaced wholesale, after a full cycle
/// has settled.
pub struct RefreshScheduler {
    quotes: QuoteService,
    cache: Arc<RwLock<QuoteCache>>,
    symbols: BTreeSet<String>,
    handle: Option<JoinHandle<()>>,
}

impl RefreshScheduler {
    pub fn new(quotes: QuoteService, cache: Arc<RwLock<QuoteCache>>) -> Self {
        Self {
            quotes,
            cache,
            symbols: BTreeSet::new(),
            handle: None,
        }
    }

    /// Reconcile the timer with the current set of held symbols.
    ///
    /// - Empty set: stop the timer (holdings view has nothing to refresh).
    /// - Unchanged set with a live timer: leave the timer alone.
    /// - Anything else: cancel and replace with a fresh timer over the new
    ///   set, which refreshes immediately.
    pub fn sync_holdings(&mut self, symbols: BTreeSet<String>) {
        if symbols.is_empty() {
            self.stop();
            return;
        }
        if symbols == self.symbols && self.is_running() {
            return;
        }

        self.stop();
        self.symbols = symbols.clone();

        let quotes = self.quotes.clone();
        let cache = Arc::clone(&self.cache);
        log::debug!("starting quote refresh timer for {} symbols", symbols.len());

        self.handle = Some(tokio::spawn(async move {
            let mut ticker = tokio::time::interval(REFRESH_INTERVAL);
            loop {
                // First tick completes immediately: refresh on start.
                ticker.tick().await;
                let snapshot = quotes.refresh_cycle(&symbols).await;
                *cache.write().await = snapshot;
            }
        }));
    }

    /// Cancel the timer, if one is running. Idempotent; called on view
    /// teardown and before every replacement.
    pub fn stop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
            log::debug!("quote refresh timer stopped");
        }
        self.symbols.clear();
    }

    /// Whether a timer task is currently live.
    pub fn is_running(&self) -> bool {
        self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// The symbol set the live timer was started with.
    pub fn tracked_symbols(&self) -> &BTreeSet<String> {
        &self.symbols
    }
}

impl Drop for RefreshScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}
