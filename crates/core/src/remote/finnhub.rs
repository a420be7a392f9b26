use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::traits::QuoteFeed;
use crate::errors::CoreError;
use crate::models::quote::{Quote, SymbolMatch};

const BASE_URL: &str = "https://finnhub.io/api/v1";

/// Finnhub market data feed.
///
/// - **Free tier**: 60 requests/minute, token-keyed.
/// - **Endpoints**: `/search?q={query}`, `/quote?symbol={symbol}`.
/// - A quote response with `c == 0` means Finnhub has no data for the
///   symbol and is treated as a failed fetch, never as a zero price.
pub struct FinnhubQuoteFeed {
    client: Client,
    api_key: String,
}

impl FinnhubQuoteFeed {
    pub fn new(api_key: String) -> Self {
        let builder = Client::builder().timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            api_key,
        }
    }
}

// ── Finnhub API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct SearchResponse {
    result: Option<Vec<SearchEntry>>,
}

#[derive(Deserialize)]
struct SearchEntry {
    symbol: String,
    description: String,
}

#[derive(Deserialize)]
struct QuoteResponse {
    /// Current price
    c: Option<f64>,
    /// Change since previous close
    d: Option<f64>,
    /// Percent change since previous close
    dp: Option<f64>,
}

#[async_trait]
impl QuoteFeed for FinnhubQuoteFeed {
    fn name(&self) -> &str {
        "Finnhub"
    }

    async fn search(&self, query: &str) -> Result<Vec<SymbolMatch>, CoreError> {
        let url = format!("{BASE_URL}/search");

        let resp: SearchResponse = self
            .client
            .get(&url)
            .query(&[("q", query), ("token", self.api_key.as_str())])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Finnhub".into(),
                message: format!("Failed to parse search results for '{query}': {e}"),
            })?;

        Ok(resp
            .result
            .unwrap_or_default()
            .into_iter()
            .map(|entry| SymbolMatch {
                symbol: entry.symbol,
                description: entry.description,
            })
            .collect())
    }

    async fn quote(&self, symbol: &str) -> Result<Quote, CoreError> {
        let upper = symbol.to_uppercase();
        let url = format!("{BASE_URL}/quote");

        let resp: QuoteResponse = self
            .client
            .get(&url)
            .query(&[("symbol", upper.as_str()), ("token", self.api_key.as_str())])
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: "Finnhub".into(),
                message: format!("Failed to parse quote for {upper}: {e}"),
            })?;

        // Finnhub reports unknown symbols as an all-zero quote.
        let price = match resp.c {
            Some(p) if p.is_finite() && p > 0.0 => p,
            _ => {
                return Err(CoreError::QuoteUnavailable { symbol: upper });
            }
        };

        Ok(Quote {
            price,
            change: resp.d.unwrap_or(0.0),
            change_percent: resp.dp.unwrap_or(0.0),
        })
    }
}
