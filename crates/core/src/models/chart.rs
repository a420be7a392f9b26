use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single point of the portfolio value-over-time series.
///
/// The core generates these — the frontend just renders them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuePoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Display window for the value-over-time chart.
///
/// Parsed from the UI range tokens; an unrecognized token parses to `None`,
/// which the range filter treats as "pass everything through".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartRange {
    OneWeek,
    OneMonth,
    YearToDate,
    OneYear,
}

impl ChartRange {
    /// Parse a range token (`1W`, `1M`, `YTD`, `1Y`).
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "1W" => Some(ChartRange::OneWeek),
            "1M" => Some(ChartRange::OneMonth),
            "YTD" => Some(ChartRange::YearToDate),
            "1Y" => Some(ChartRange::OneYear),
            _ => None,
        }
    }

    /// The exclusive lower bound of the window ending at `today`: points
    /// strictly after this date are inside the window.
    pub fn cutoff(&self, today: NaiveDate) -> NaiveDate {
        match self {
            ChartRange::OneWeek => today - chrono::Days::new(7),
            ChartRange::OneMonth => today - chrono::Months::new(1),
            ChartRange::YearToDate => {
                NaiveDate::from_ymd_opt(today.year(), 1, 1).unwrap_or(today)
            }
            ChartRange::OneYear => today - chrono::Months::new(12),
        }
    }
}

impl std::fmt::Display for ChartRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let token = match self {
            ChartRange::OneWeek => "1W",
            ChartRange::OneMonth => "1M",
            ChartRange::YearToDate => "YTD",
            ChartRange::OneYear => "1Y",
        };
        write!(f, "{token}")
    }
}
