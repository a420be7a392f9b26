use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A live market quote for one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Current price
    pub price: f64,
    /// Absolute change since previous close
    pub change: f64,
    /// Percent change since previous close
    pub change_percent: f64,
}

/// A symbol's price as held in the quote cache.
///
/// The missing case is structurally explicit: a failed or empty fetch is
/// `Unavailable`, never an absent key and never zero. Aggregates exclude
/// `Unavailable` holdings from their sums.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum QuotedPrice {
    Available(f64),
    Unavailable,
}

impl QuotedPrice {
    /// The price, if one is available.
    pub fn price(&self) -> Option<f64> {
        match self {
            QuotedPrice::Available(p) => Some(*p),
            QuotedPrice::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, QuotedPrice::Available(_))
    }
}

/// Cache of current market prices for every distinct held symbol.
///
/// Replaced wholesale at the end of each refresh cycle — never merged
/// incrementally — so aggregation observes either the previous complete
/// snapshot or the new one. Once a refresh has run, every symbol that was
/// held at refresh time has an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuoteCache {
    /// symbol → price-or-unavailable
    pub quotes: HashMap<String, QuotedPrice>,

    /// When the last refresh cycle completed. `None` until the first run.
    pub refreshed_at: Option<DateTime<Utc>>,
}

impl QuoteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a symbol's quoted price. Symbols never seen by a refresh
    /// (e.g., before the first cycle) come back `Unavailable`.
    pub fn quote(&self, symbol: &str) -> QuotedPrice {
        self.quotes
            .get(&symbol.to_uppercase())
            .copied()
            .unwrap_or(QuotedPrice::Unavailable)
    }

    /// Number of symbols covered by the current snapshot.
    pub fn symbol_count(&self) -> usize {
        self.quotes.len()
    }
}

/// One hit from a symbol search, enriched with a bounded per-symbol quote
/// lookup. `quote` is `None` when that lookup failed or timed out — the
/// failure is scoped to this symbol and never touches the cache.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub symbol: String,
    pub description: String,
    pub quote: Option<Quote>,
}

/// A raw symbol match from the quote feed's search endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolMatch {
    pub symbol: String,
    pub description: String,
}
