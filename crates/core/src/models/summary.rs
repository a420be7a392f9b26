use serde::{Deserialize, Serialize};

use super::investment::Investment;
use super::transaction::Category;

/// Income / expense / balance over the whole transaction list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CashSummary {
    /// Sum of positive amounts (≥ 0)
    pub income_total: f64,

    /// Sum of negative amounts, kept negative (≤ 0)
    pub expense_total: f64,

    /// `income_total + expense_total`
    pub balance: f64,
}

/// One slice of the expense breakdown: absolute spend per category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,

    /// Sum of absolute values of this category's expenses
    pub total: f64,
}

/// A holding joined with its current quote, ready for display.
///
/// `current_value` and `unrealized_pl` are `None` when the symbol's quote
/// is unavailable — shown as not-available, excluded from portfolio sums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HoldingView {
    pub investment: Investment,

    /// `price * shares`, if a quote is available
    pub current_value: Option<f64>,

    /// `(price - purchase_price) * shares`, if a quote is available
    pub unrealized_pl: Option<f64>,
}

/// Portfolio-level totals across all holdings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    /// Sum of `purchase_price * shares` over ALL holdings — independent of
    /// the quote cache.
    pub total_invested: f64,

    /// Sum of `current_value` over holdings with an available quote only.
    pub total_current_value: f64,

    /// Sum of `unrealized_pl` over holdings with an available quote only.
    pub total_pl: f64,

    /// Per-holding breakdown, in canonical list order.
    pub holdings: Vec<HoldingView>,
}
