use crate::models::investment::Investment;
use crate::models::quote::QuoteCache;
use crate::models::summary::{CashSummary, CategoryTotal, HoldingView, PortfolioSummary};
use crate::models::transaction::Transaction;

/// Derives every display aggregate from current state.
///
/// Pure `state in → aggregates out`: nothing here mutates the ledger or
/// the quote cache, and every function is a full rescan of its inputs —
/// fine at single-user record counts.
pub struct AnalyticsService;

impl AnalyticsService {
    pub fn new() -> Self {
        Self
    }

    /// Income, expenses, and net balance over the whole transaction list.
    ///
    /// `expense_total` stays negative; `balance` is the plain sum of both.
    pub fn cash_summary(&self, transactions: &[Transaction]) -> CashSummary {
        let income_total: f64 = transactions
            .iter()
            .map(|t| t.amount)
            .filter(|a| *a > 0.0)
            .sum();
        let expense_total: f64 = transactions
            .iter()
            .map(|t| t.amount)
            .filter(|a| *a < 0.0)
            .sum();

        CashSummary {
            income_total,
            expense_total,
            balance: income_total + expense_total,
        }
    }

    /// Absolute spend per category over expense transactions only.
    ///
    /// Output order is the order in which each category first occurs in
    /// the canonical (date-descending) list, so the breakdown is stable
    /// for a given ledger state.
    pub fn category_breakdown(&self, transactions: &[Transaction]) -> Vec<CategoryTotal> {
        let mut breakdown: Vec<CategoryTotal> = Vec::new();

        for t in transactions.iter().filter(|t| t.amount < 0.0) {
            match breakdown.iter_mut().find(|b| b.category == t.category) {
                Some(slice) => slice.total += t.amount.abs(),
                None => breakdown.push(CategoryTotal {
                    category: t.category,
                    total: t.amount.abs(),
                }),
            }
        }

        breakdown
    }

    /// Join every holding with its current quote.
    ///
    /// Holdings whose symbol is unavailable in the cache get `None` for
    /// both derived fields — displayed as not-available, never as zero.
    pub fn holding_views(
        &self,
        investments: &[Investment],
        cache: &QuoteCache,
    ) -> Vec<HoldingView> {
        investments
            .iter()
            .map(|inv| {
                let price = cache.quote(&inv.symbol).price();
                HoldingView {
                    current_value: price.map(|p| p * inv.shares),
                    unrealized_pl: price.map(|p| (p - inv.purchase_price) * inv.shares),
                    investment: inv.clone(),
                }
            })
            .collect()
    }

    /// Portfolio-level totals.
    ///
    /// `total_invested` counts every holding regardless of quotes;
    /// `total_current_value` and `total_pl` sum only holdings with an
    /// available quote.
    pub fn portfolio_summary(
        &self,
        investments: &[Investment],
        cache: &QuoteCache,
    ) -> PortfolioSummary {
        let holdings = self.holding_views(investments, cache);

        let total_invested = investments.iter().map(Investment::invested).sum();
        let total_current_value = holdings.iter().filter_map(|h| h.current_value).sum();
        let total_pl = holdings.iter().filter_map(|h| h.unrealized_pl).sum();

        PortfolioSummary {
            total_invested,
            total_current_value,
            total_pl,
            holdings,
        }
    }
}

impl Default for AnalyticsService {
    fn default() -> Self {
        Self::new()
    }
}
