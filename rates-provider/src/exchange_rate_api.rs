//! HTTP adapter for the exchangerate-api.com v6 API.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use rates_types::{Currency, ProviderError, RateProvider, RateTable};
use serde::Deserialize;

/// Public v6 endpoint. Tests and self-hosted mirrors can point elsewhere via
/// [`ExchangeRateApiClient::with_base_url`].
const DEFAULT_BASE_URL: &str = "https://v6.exchangerate-api.com/v6";

/// Upstream calls that take longer than this count as failed.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Wire shape of a v6 API response. The payload carries more fields
/// (documentation links, update timestamps); only what the service consumes
/// is decoded here.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    result: String,
    #[serde(default)]
    conversion_rates: HashMap<String, f64>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
}

/// Rate source backed by exchangerate-api.com.
///
/// The API key is embedded in every request URL, so URLs are never logged.
pub struct ExchangeRateApiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl ExchangeRateApiClient {
    /// Creates a client against the public v6 endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a client against a custom endpoint.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn latest_url(&self, base: Currency) -> String {
        format!("{}/{}/latest/{}", self.base_url, self.api_key, base.code())
    }

    fn history_url(&self, base: Currency, date: NaiveDate) -> String {
        format!(
            "{}/{}/history/{}/{}/{}/{}",
            self.base_url,
            self.api_key,
            base.code(),
            date.year(),
            date.month(),
            date.day()
        )
    }

    async fn fetch(&self, url: String) -> Result<ApiResponse, ProviderError> {
        let resp = self
            .http
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status.as_u16()));
        }

        let body: ApiResponse = resp
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        if body.result != "success" {
            let reason = body.error_type.unwrap_or_else(|| "unknown".to_string());
            return Err(ProviderError::Api(reason));
        }

        Ok(body)
    }
}

#[async_trait]
impl RateProvider for ExchangeRateApiClient {
    #[tracing::instrument(skip(self))]
    async fn latest_rates(&self, base: Currency) -> Result<RateTable, ProviderError> {
        let body = self.fetch(self.latest_url(base)).await?;
        tracing::debug!(
            base = %base,
            rates = body.conversion_rates.len(),
            "Fetched latest rates"
        );
        Ok(RateTable::new(base, body.conversion_rates))
    }

    #[tracing::instrument(skip(self))]
    async fn historical_rates(
        &self,
        base: Currency,
        date: NaiveDate,
    ) -> Result<RateTable, ProviderError> {
        let body = self.fetch(self.history_url(base, date)).await?;
        tracing::debug!(
            base = %base,
            %date,
            rates = body.conversion_rates.len(),
            "Fetched historical rates"
        );
        Ok(RateTable::new(base, body.conversion_rates))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_url_embeds_key_and_base() {
        let client = ExchangeRateApiClient::with_base_url("test-key", "http://localhost:9000");
        assert_eq!(
            client.latest_url(Currency::USD),
            "http://localhost:9000/test-key/latest/USD"
        );
    }

    #[test]
    fn test_history_url_uses_unpadded_date_parts() {
        let client = ExchangeRateApiClient::with_base_url("test-key", "http://localhost:9000/");
        let date = NaiveDate::from_ymd_opt(2025, 3, 7).unwrap();
        assert_eq!(
            client.history_url(Currency::EUR, date),
            "http://localhost:9000/test-key/history/EUR/2025/3/7"
        );
    }

    #[test]
    fn test_decodes_success_payload() {
        let json = r#"{
            "result": "success",
            "documentation": "https://www.exchangerate-api.com/docs",
            "base_code": "USD",
            "conversion_rates": {"EUR": 0.92, "INR": 83.1}
        }"#;
        let resp: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.result, "success");
        assert_eq!(resp.conversion_rates["EUR"], 0.92);
        assert!(resp.error_type.is_none());
    }

    #[test]
    fn test_decodes_error_payload_without_rates() {
        let json = r#"{"result": "error", "error-type": "invalid-key"}"#;
        let resp: ApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.result, "error");
        assert_eq!(resp.error_type.as_deref(), Some("invalid-key"));
        assert!(resp.conversion_rates.is_empty());
    }
}
