use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::traits::LedgerStore;
use crate::errors::CoreError;
use crate::models::investment::Investment;
use crate::models::settings::Settings;
use crate::models::transaction::Transaction;

const PROVIDER: &str = "Ledger Store";

/// REST client for the remote ledger store.
///
/// Every request is keyed by the user's email; when a session token is
/// configured it is attached as a bearer `Authorization` header on the
/// whole client. Mutations are acknowledged with an empty body, except
/// investment creation which may return `{item: {id}}`.
pub struct RestLedgerStore {
    client: Client,
    base_url: String,
}

impl RestLedgerStore {
    pub fn new(settings: &Settings) -> Self {
        let mut builder = Client::builder().timeout(Duration::from_secs(30));

        if let Some(token) = &settings.bearer_token {
            let mut headers = HeaderMap::new();
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
                headers.insert(AUTHORIZATION, value);
                builder = builder.default_headers(headers);
            }
        }

        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Map a non-2xx response to an API error, passing 2xx through.
    async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, CoreError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(CoreError::Api {
            provider: PROVIDER.into(),
            message: format!("HTTP {status}: {body}"),
        })
    }
}

// ── Request / response bodies ───────────────────────────────────────

#[derive(Serialize)]
struct TransactionBody<'a> {
    #[serde(flatten)]
    transaction: &'a Transaction,
    email: &'a str,
}

#[derive(Serialize)]
struct InvestmentBody<'a> {
    #[serde(flatten)]
    investment: &'a Investment,
    email: &'a str,
}

/// Creation payload carries no id; the store issues one.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateInvestmentBody<'a> {
    symbol: &'a str,
    shares: f64,
    purchase_price: f64,
    purchase_date: chrono::NaiveDate,
    email: &'a str,
}

#[derive(Serialize)]
struct DeleteBody<'a> {
    id: &'a str,
    email: &'a str,
}

#[derive(Deserialize)]
struct CreateInvestmentResponse {
    item: Option<CreatedItem>,
}

#[derive(Deserialize)]
struct CreatedItem {
    id: Option<String>,
}

#[async_trait]
impl LedgerStore for RestLedgerStore {
    async fn fetch_transactions(&self, email: &str) -> Result<Vec<Transaction>, CoreError> {
        let resp = self
            .client
            .get(self.url("/transactions"))
            .query(&[("email", email)])
            .send()
            .await?;

        Self::check_status(resp)
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("Failed to parse transactions: {e}"),
            })
    }

    async fn create_transaction(
        &self,
        email: &str,
        transaction: &Transaction,
    ) -> Result<(), CoreError> {
        let resp = self
            .client
            .post(self.url("/transactions"))
            .json(&TransactionBody { transaction, email })
            .send()
            .await?;

        Self::check_status(resp).await?;
        Ok(())
    }

    async fn update_transaction(
        &self,
        email: &str,
        transaction: &Transaction,
    ) -> Result<(), CoreError> {
        let resp = self
            .client
            .patch(self.url("/transactions"))
            .json(&TransactionBody { transaction, email })
            .send()
            .await?;

        Self::check_status(resp).await?;
        Ok(())
    }

    async fn delete_transaction(&self, email: &str, id: &str) -> Result<(), CoreError> {
        let resp = self
            .client
            .delete(self.url("/transactions"))
            .json(&DeleteBody { id, email })
            .send()
            .await?;

        Self::check_status(resp).await?;
        Ok(())
    }

    async fn fetch_investments(&self, email: &str) -> Result<Vec<Investment>, CoreError> {
        let resp = self
            .client
            .get(self.url("/investments"))
            .query(&[("email", email)])
            .send()
            .await?;

        Self::check_status(resp)
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("Failed to parse investments: {e}"),
            })
    }

    async fn create_investment(
        &self,
        email: &str,
        investment: &Investment,
    ) -> Result<Option<String>, CoreError> {
        let resp = self
            .client
            .post(self.url("/investments"))
            .json(&CreateInvestmentBody {
                symbol: &investment.symbol,
                shares: investment.shares,
                purchase_price: investment.purchase_price,
                purchase_date: investment.purchase_date,
                email,
            })
            .send()
            .await?;

        let resp: CreateInvestmentResponse = Self::check_status(resp)
            .await?
            .json()
            .await
            .map_err(|e| CoreError::Api {
                provider: PROVIDER.into(),
                message: format!("Failed to parse creation response: {e}"),
            })?;

        Ok(resp.item.and_then(|item| item.id))
    }

    async fn update_investment(
        &self,
        email: &str,
        investment: &Investment,
    ) -> Result<(), CoreError> {
        let resp = self
            .client
            .patch(self.url("/investments"))
            .json(&InvestmentBody { investment, email })
            .send()
            .await?;

        Self::check_status(resp).await?;
        Ok(())
    }

    async fn delete_investment(&self, email: &str, id: &str) -> Result<(), CoreError> {
        let resp = self
            .client
            .delete(self.url("/investments"))
            .json(&DeleteBody { id, email })
            .send()
            .await?;

        Self::check_status(resp).await?;
        Ok(())
    }
}
