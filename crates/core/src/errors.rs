use thiserror::Error;

/// Which canonical record set a failed load was for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Transactions,
    Investments,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Transactions => write!(f, "transactions"),
            RecordKind::Investments => write!(f, "investments"),
        }
    }
}

/// Unified error type for the entire finance-tracker-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Remote store synchronization ────────────────────────────────
    #[error("Failed to load {list}: {message}")]
    Load { list: RecordKind, message: String },

    #[error("Failed to {operation}: {message}")]
    Mutation { operation: String, message: String },

    // ── Quote feed ──────────────────────────────────────────────────
    #[error("No quote available for {symbol}")]
    QuoteUnavailable { symbol: String },

    #[error("Stock search failed: {0}")]
    Search(String),

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl CoreError {
    /// Wrap a lower-level error as a mutation failure for the given operation.
    pub fn mutation(operation: impl Into<String>, source: &CoreError) -> Self {
        CoreError::Mutation {
            operation: operation.into(),
            message: source.to_string(),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs to prevent
        // API token leakage. reqwest errors often contain full URLs with secrets.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
