// ═══════════════════════════════════════════════════════════════════
// Model Tests — Category, Transaction, Investment, QuoteCache,
// ChartRange, Ledger
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use finance_tracker_core::models::chart::ChartRange;
use finance_tracker_core::models::investment::{Investment, InvestmentDraft};
use finance_tracker_core::models::ledger::Ledger;
use finance_tracker_core::models::quote::{QuoteCache, QuotedPrice};
use finance_tracker_core::models::transaction::{Category, Transaction, TransactionDraft};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
//  Category
// ═══════════════════════════════════════════════════════════════════

mod category {
    use super::*;

    #[test]
    fn salary_is_the_only_income_category() {
        for c in Category::ALL {
            assert_eq!(c.is_income(), c == Category::Salary, "{c}");
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(Category::Food.to_string(), "Food");
        assert_eq!(Category::Salary.to_string(), "Salary");
        assert_eq!(Category::Other.to_string(), "Other");
    }

    #[test]
    fn serde_roundtrip() {
        for c in Category::ALL {
            let json = serde_json::to_string(&c).unwrap();
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(c, back);
        }
    }

    #[test]
    fn unknown_string_deserializes_to_other() {
        let c: Category = serde_json::from_str("\"Groceries\"").unwrap();
        assert_eq!(c, Category::Other);
    }

    #[test]
    fn empty_string_deserializes_to_other() {
        let c: Category = serde_json::from_str("\"\"").unwrap();
        assert_eq!(c, Category::Other);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Transaction & TransactionDraft
// ═══════════════════════════════════════════════════════════════════

mod transaction {
    use super::*;

    #[test]
    fn salary_draft_stores_positive_amount() {
        let draft = TransactionDraft::new(250.0, Category::Salary, d(2025, 6, 1));
        assert_eq!(draft.signed_amount(), 250.0);
    }

    #[test]
    fn expense_draft_stores_negative_amount() {
        let draft = TransactionDraft::new(40.0, Category::Food, d(2025, 6, 1));
        assert_eq!(draft.signed_amount(), -40.0);
    }

    #[test]
    fn sign_normalization_ignores_input_sign() {
        let salary = TransactionDraft::new(-250.0, Category::Salary, d(2025, 6, 1));
        assert_eq!(salary.signed_amount(), 250.0);

        let rent = TransactionDraft::new(-900.0, Category::Rent, d(2025, 6, 1));
        assert_eq!(rent.signed_amount(), -900.0);
    }

    #[test]
    fn every_non_salary_category_is_an_expense() {
        for c in Category::ALL.into_iter().filter(|c| *c != Category::Salary) {
            let draft = TransactionDraft::new(10.0, c, d(2025, 6, 1));
            assert!(draft.signed_amount() < 0.0, "{c} should store negative");
        }
    }

    #[test]
    fn deserializes_with_missing_category_as_other() {
        let json = r#"{"id": "t1", "amount": -12.5, "date": "2025-06-01"}"#;
        let t: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(t.category, Category::Other);
        assert_eq!(t.amount, -12.5);
    }

    #[test]
    fn deserializes_with_unknown_category_as_other() {
        let json = r#"{"id": "t1", "amount": -5.0, "category": "Gifts", "date": "2025-06-01"}"#;
        let t: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(t.category, Category::Other);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Investment
// ═══════════════════════════════════════════════════════════════════

mod investment {
    use super::*;

    #[test]
    fn invested_is_price_times_shares() {
        let inv = Investment {
            id: "i1".into(),
            symbol: "AAPL".into(),
            shares: 10.0,
            purchase_price: 100.0,
            purchase_date: d(2025, 1, 15),
        };
        assert_eq!(inv.invested(), 1000.0);
    }

    #[test]
    fn draft_uppercases_symbol() {
        let draft = InvestmentDraft::new("aapl", 1.0, 50.0, d(2025, 1, 15));
        assert_eq!(draft.symbol, "AAPL");
    }

    #[test]
    fn wire_format_is_camel_case() {
        let inv = Investment {
            id: "i1".into(),
            symbol: "MSFT".into(),
            shares: 2.0,
            purchase_price: 310.5,
            purchase_date: d(2025, 3, 10),
        };
        let json = serde_json::to_string(&inv).unwrap();
        assert!(json.contains("\"purchasePrice\":310.5"));
        assert!(json.contains("\"purchaseDate\":\"2025-03-10\""));
    }

    #[test]
    fn deserializes_from_store_shape() {
        let json = r#"{
            "id": "42",
            "symbol": "GOOGL",
            "shares": 0.5,
            "purchasePrice": 180.0,
            "purchaseDate": "2025-02-20"
        }"#;
        let inv: Investment = serde_json::from_str(json).unwrap();
        assert_eq!(inv.symbol, "GOOGL");
        assert_eq!(inv.shares, 0.5);
        assert_eq!(inv.purchase_date, d(2025, 2, 20));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  QuotedPrice & QuoteCache
// ═══════════════════════════════════════════════════════════════════

mod quotes {
    use super::*;

    #[test]
    fn available_exposes_price() {
        assert_eq!(QuotedPrice::Available(123.45).price(), Some(123.45));
        assert!(QuotedPrice::Available(123.45).is_available());
    }

    #[test]
    fn unavailable_is_not_zero() {
        assert_eq!(QuotedPrice::Unavailable.price(), None);
        assert!(!QuotedPrice::Unavailable.is_available());
    }

    #[test]
    fn fresh_cache_has_no_refresh_timestamp() {
        let cache = QuoteCache::new();
        assert_eq!(cache.refreshed_at, None);
        assert_eq!(cache.symbol_count(), 0);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let mut cache = QuoteCache::new();
        cache.quotes.insert("AAPL".into(), QuotedPrice::Available(110.0));
        assert_eq!(cache.quote("aapl").price(), Some(110.0));
    }

    #[test]
    fn unseen_symbol_reads_unavailable() {
        let cache = QuoteCache::new();
        assert_eq!(cache.quote("ZZZZ"), QuotedPrice::Unavailable);
    }
}

// ═══════════════════════════════════════════════════════════════════
//  ChartRange
// ═══════════════════════════════════════════════════════════════════

mod chart_range {
    use super::*;

    #[test]
    fn parses_known_tokens() {
        assert_eq!(ChartRange::parse("1W"), Some(ChartRange::OneWeek));
        assert_eq!(ChartRange::parse("1M"), Some(ChartRange::OneMonth));
        assert_eq!(ChartRange::parse("YTD"), Some(ChartRange::YearToDate));
        assert_eq!(ChartRange::parse("1Y"), Some(ChartRange::OneYear));
    }

    #[test]
    fn unrecognized_token_parses_to_none() {
        assert_eq!(ChartRange::parse("5Y"), None);
        assert_eq!(ChartRange::parse(""), None);
        assert_eq!(ChartRange::parse("1w"), None);
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for range in [
            ChartRange::OneWeek,
            ChartRange::OneMonth,
            ChartRange::YearToDate,
            ChartRange::OneYear,
        ] {
            assert_eq!(ChartRange::parse(&range.to_string()), Some(range));
        }
    }

    #[test]
    fn one_week_cutoff_is_seven_days_back() {
        let today = d(2025, 6, 15);
        assert_eq!(ChartRange::OneWeek.cutoff(today), d(2025, 6, 8));
    }

    #[test]
    fn one_month_cutoff_is_calendar_month_back() {
        let today = d(2025, 3, 31);
        assert_eq!(ChartRange::OneMonth.cutoff(today), d(2025, 2, 28));
    }

    #[test]
    fn ytd_cutoff_is_start_of_current_year() {
        let today = d(2025, 6, 15);
        assert_eq!(ChartRange::YearToDate.cutoff(today), d(2025, 1, 1));
    }

    #[test]
    fn one_year_cutoff_is_twelve_months_back() {
        let today = d(2025, 6, 15);
        assert_eq!(ChartRange::OneYear.cutoff(today), d(2024, 6, 15));
    }
}

// ═══════════════════════════════════════════════════════════════════
//  Ledger
// ═══════════════════════════════════════════════════════════════════

mod ledger {
    use super::*;

    fn holding(id: &str, symbol: &str) -> Investment {
        Investment {
            id: id.into(),
            symbol: symbol.into(),
            shares: 1.0,
            purchase_price: 10.0,
            purchase_date: d(2025, 1, 1),
        }
    }

    #[test]
    fn held_symbols_are_distinct_and_sorted() {
        let mut ledger = Ledger::new();
        ledger.investments.push(holding("1", "MSFT"));
        ledger.investments.push(holding("2", "AAPL"));
        ledger.investments.push(holding("3", "MSFT"));

        let symbols: Vec<String> = ledger.held_symbols().into_iter().collect();
        assert_eq!(symbols, vec!["AAPL".to_string(), "MSFT".to_string()]);
    }

    #[test]
    fn held_symbols_uppercase() {
        let mut ledger = Ledger::new();
        ledger.investments.push(holding("1", "aapl"));
        let symbols: Vec<String> = ledger.held_symbols().into_iter().collect();
        assert_eq!(symbols, vec!["AAPL".to_string()]);
    }

    #[test]
    fn empty_ledger_has_no_symbols() {
        assert!(Ledger::new().held_symbols().is_empty());
    }
}
