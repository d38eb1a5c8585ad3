//! # Rates Client SDK
//!
//! A typed Rust client for the Exchange Rate API.

use chrono::NaiveDate;
use rates_types::{ConvertResponse, RateResponse};
use reqwest::Client;
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Exchange Rate API client.
pub struct RatesClient {
    base_url: String,
    http: Client,
}

impl RatesClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await?;
        Ok(resp.status().is_success())
    }

    /// Gets the latest rate between two currencies.
    pub async fn latest(&self, from: &str, to: &str) -> Result<RateResponse, ClientError> {
        self.get(&format!("/latest?from={}&to={}", from, to)).await
    }

    /// Converts an amount between two currencies, optionally on a past date.
    pub async fn convert(
        &self,
        from: &str,
        to: &str,
        amount: f64,
        date: Option<NaiveDate>,
    ) -> Result<ConvertResponse, ClientError> {
        let mut path = format!("/convert?from={}&to={}&amount={}", from, to, amount);
        if let Some(date) = date {
            path.push_str(&format!("&date={}", date.format("%Y-%m-%d")));
        }
        self.get(&path).await
    }

    /// Gets the rate between two currencies on a past date.
    pub async fn historical(
        &self,
        from: &str,
        to: &str,
        date: NaiveDate,
    ) -> Result<RateResponse, ClientError> {
        self.get(&format!(
            "/historical?from={}&to={}&date={}",
            from,
            to,
            date.format("%Y-%m-%d")
        ))
        .await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let resp = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        self.handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}
