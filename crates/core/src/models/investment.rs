use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An equity holding: a quantity of shares of one symbol acquired at a
/// price on a date.
///
/// Wire format uses camelCase field names (`purchasePrice`, `purchaseDate`)
/// to match the remote ledger store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
    /// Opaque unique identifier. Server-issued when the creation response
    /// carries one, otherwise a locally generated fallback.
    pub id: String,

    /// Ticker symbol, uppercased (e.g., "AAPL")
    pub symbol: String,

    /// Number of shares held (positive, fractional allowed)
    pub shares: f64,

    /// Price per share at purchase (positive)
    pub purchase_price: f64,

    /// Date of purchase (daily granularity)
    pub purchase_date: NaiveDate,
}

impl Investment {
    /// Cost basis of the whole position: `purchase_price * shares`.
    pub fn invested(&self) -> f64 {
        self.purchase_price * self.shares
    }
}

/// Raw user input for creating or editing a holding.
#[derive(Debug, Clone, PartialEq)]
pub struct InvestmentDraft {
    pub symbol: String,
    pub shares: f64,
    pub purchase_price: f64,
    pub purchase_date: NaiveDate,
}

impl InvestmentDraft {
    pub fn new(
        symbol: impl Into<String>,
        shares: f64,
        purchase_price: f64,
        purchase_date: NaiveDate,
    ) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            shares,
            purchase_price,
            purchase_date,
        }
    }
}
