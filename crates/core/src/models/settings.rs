use serde::{Deserialize, Serialize};

/// Connection settings for the remote collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the remote ledger store (transactions + investments).
    pub api_base_url: String,

    /// API token for the market quote service.
    pub quote_api_key: String,

    /// Bearer token attached to ledger store requests when a session exists.
    pub bearer_token: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            quote_api_key: String::new(),
            bearer_token: None,
        }
    }
}
