use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use std::time::Duration;

use futures::future::join_all;

use crate::errors::CoreError;
use crate::models::quote::{Quote, QuoteCache, QuotedPrice, SearchResult};
use crate::remote::traits::QuoteFeed;

/// Bound on search-triggered quote feed calls. The periodic refresh cycle
/// is not bounded here; it relies on the HTTP client's own timeout.
pub const SEARCH_TIMEOUT_SECS: u64 = 8;

/// Fetches market quotes from the feed, one cycle at a time.
///
/// Failure policy is isolation: within a cycle, one symbol's failed fetch
/// maps that symbol to [`QuotedPrice::Unavailable`] and never aborts the
/// others. A cycle always produces a complete cache snapshot.
#[derive(Clone)]
pub struct QuoteService {
    feed: Arc<dyn QuoteFeed>,
}

impl QuoteService {
    pub fn new(feed: Arc<dyn QuoteFeed>) -> Self {
        Self { feed }
    }

    /// Run one full refresh cycle over the given distinct symbols.
    ///
    /// All per-symbol requests are issued concurrently and awaited to
    /// settlement regardless of individual outcome. The returned cache is
    /// a complete snapshot: every requested symbol has an entry, and the
    /// refresh timestamp is set.
    pub async fn refresh_cycle(&self, symbols: &BTreeSet<String>) -> QuoteCache {
        let fetches = symbols.iter().map(|symbol| {
            let feed = Arc::clone(&self.feed);
            async move {
                match feed.quote(symbol).await {
                    Ok(quote) => (symbol.clone(), QuotedPrice::Available(quote.price)),
                    Err(e) => {
                        log::warn!("quote fetch failed for {symbol}: {e}");
                        (symbol.clone(), QuotedPrice::Unavailable)
                    }
                }
            }
        });

        let quotes: HashMap<String, QuotedPrice> = join_all(fetches).await.into_iter().collect();

        QuoteCache {
            quotes,
            refreshed_at: Some(chrono::Utc::now()),
        }
    }

    /// Bounded single-symbol lookup used by search enrichment. Timeout or
    /// failure yields `None` for this symbol only; the cache is untouched.
    pub async fn lookup_quote(&self, symbol: &str) -> Option<Quote> {
        let fetch = self.feed.quote(symbol);
        match tokio::time::timeout(Duration::from_secs(SEARCH_TIMEOUT_SECS), fetch).await {
            Ok(Ok(quote)) => Some(quote),
            Ok(Err(e)) => {
                log::warn!("quote lookup failed for {symbol}: {e}");
                None
            }
            Err(_) => {
                log::warn!("quote lookup timed out for {symbol}");
                None
            }
        }
    }

    /// Search the feed for symbols matching `query` and enrich each hit
    /// with a bounded per-symbol quote lookup.
    ///
    /// A blank query short-circuits to an empty result. A failed or
    /// timed-out search surfaces as an error with an empty result set;
    /// per-hit lookup failures degrade that hit to `quote: None`.
    pub async fn search_with_quotes(
        &self,
        query: &str,
    ) -> Result<Vec<SearchResult>, CoreError> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let search = self.feed.search(query);
        let matches = match tokio::time::timeout(
            Duration::from_secs(SEARCH_TIMEOUT_SECS),
            search,
        )
        .await
        {
            Ok(Ok(matches)) => matches,
            Ok(Err(e)) => return Err(CoreError::Search(e.to_string())),
            Err(_) => return Err(CoreError::Timeout(SEARCH_TIMEOUT_SECS)),
        };

        let enriched = matches.into_iter().map(|hit| async move {
            let quote = self.lookup_quote(&hit.symbol).await;
            SearchResult {
                symbol: hit.symbol,
                description: hit.description,
                quote,
            }
        });

        Ok(join_all(enriched).await)
    }
}
