use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::chart::{ChartRange, ValuePoint};
use crate::models::investment::Investment;
use crate::models::quote::QuoteCache;
use crate::services::analytics_service::AnalyticsService;

/// Builds the portfolio value-over-time series.
///
/// The series is a cost-basis approximation: invested amounts bucketed by
/// purchase date, with today's bucket overwritten by the live market value
/// of quotable holdings. It is not a historical mark-to-market valuation.
pub struct ChartService {
    analytics: AnalyticsService,
}

impl ChartService {
    pub fn new() -> Self {
        Self {
            analytics: AnalyticsService::new(),
        }
    }

    /// Build the full (unfiltered) series, ascending by date.
    ///
    /// Holdings sharing a purchase date sum into one bucket. The bucket at
    /// `today` is then set — overwritten, not summed — to the current
    /// total market value of holdings with an available quote.
    pub fn value_over_time(
        &self,
        investments: &[Investment],
        cache: &QuoteCache,
        today: NaiveDate,
    ) -> Vec<ValuePoint> {
        let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();

        for inv in investments {
            *buckets.entry(inv.purchase_date).or_insert(0.0) += inv.invested();
        }

        let summary = self.analytics.portfolio_summary(investments, cache);
        buckets.insert(today, summary.total_current_value);

        buckets
            .into_iter()
            .map(|(date, value)| ValuePoint { date, value })
            .collect()
    }

    /// Keep points strictly after `today − window`; `None` (an
    /// unrecognized range token) passes everything through.
    pub fn filter_range(
        &self,
        points: &[ValuePoint],
        range: Option<ChartRange>,
        today: NaiveDate,
    ) -> Vec<ValuePoint> {
        match range {
            Some(range) => {
                let cutoff = range.cutoff(today);
                points.iter().filter(|p| p.date > cutoff).copied().collect()
            }
            None => points.to_vec(),
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
