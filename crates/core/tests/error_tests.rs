// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use finance_tracker_core::errors::{CoreError, RecordKind};

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn load_transactions() {
        let err = CoreError::Load {
            list: RecordKind::Transactions,
            message: "connection refused".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to load transactions: connection refused"
        );
    }

    #[test]
    fn load_investments() {
        let err = CoreError::Load {
            list: RecordKind::Investments,
            message: "HTTP 500".into(),
        };
        assert_eq!(err.to_string(), "Failed to load investments: HTTP 500");
    }

    #[test]
    fn mutation() {
        let err = CoreError::Mutation {
            operation: "save transaction".into(),
            message: "HTTP 502".into(),
        };
        assert_eq!(err.to_string(), "Failed to save transaction: HTTP 502");
    }

    #[test]
    fn quote_unavailable() {
        let err = CoreError::QuoteUnavailable {
            symbol: "XXXX".into(),
        };
        assert_eq!(err.to_string(), "No quote available for XXXX");
    }

    #[test]
    fn search() {
        let err = CoreError::Search("rate limited".into());
        assert_eq!(err.to_string(), "Stock search failed: rate limited");
    }

    #[test]
    fn api_error() {
        let err = CoreError::Api {
            provider: "Finnhub".into(),
            message: "rate limited".into(),
        };
        assert_eq!(err.to_string(), "API error (Finnhub): rate limited");
    }

    #[test]
    fn network() {
        let err = CoreError::Network("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn timeout() {
        let err = CoreError::Timeout(8);
        assert_eq!(err.to_string(), "Request timed out after 8 seconds");
    }

    #[test]
    fn validation() {
        let err = CoreError::Validation("amount must be positive".into());
        assert_eq!(err.to_string(), "Validation failed: amount must be positive");
    }

    #[test]
    fn not_found() {
        let err = CoreError::NotFound("abc-123".into());
        assert_eq!(err.to_string(), "Record not found: abc-123");
    }

    #[test]
    fn deserialization() {
        let err = CoreError::Deserialization("unexpected EOF".into());
        assert_eq!(err.to_string(), "Deserialization error: unexpected EOF");
    }
}

// ── Record kinds ────────────────────────────────────────────────────

mod record_kind {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(RecordKind::Transactions.to_string(), "transactions");
        assert_eq!(RecordKind::Investments.to_string(), "investments");
    }
}

// ── From impls & helpers ────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn serde_json_errors_become_deserialization() {
        let bad: Result<Vec<i32>, _> = serde_json::from_str("not json");
        let err: CoreError = bad.unwrap_err().into();
        assert!(matches!(err, CoreError::Deserialization(_)));
    }

    #[test]
    fn mutation_helper_wraps_the_source_message() {
        let source = CoreError::Network("connection refused".into());
        let err = CoreError::mutation("delete investment", &source);
        assert_eq!(
            err.to_string(),
            "Failed to delete investment: Network error: connection refused"
        );
    }

    #[test]
    fn errors_are_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<CoreError>();
    }
}
