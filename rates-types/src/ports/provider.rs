//! Rate provider port.
//!
//! This trait defines the interface for upstream exchange-rate sources.
//! Implementations can be HTTP clients, mock providers, etc.

use chrono::NaiveDate;

use crate::domain::{Currency, RateTable};

/// Error type for provider fetches. Every variant is an upstream failure
/// from the caller's point of view; the split exists for logging.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Upstream returned HTTP {0}")]
    Status(u16),

    #[error("Provider error: {0}")]
    Api(String),

    #[error("Malformed provider response: {0}")]
    Decode(String),
}

/// Port trait for upstream rate providers.
#[async_trait::async_trait]
pub trait RateProvider: Send + Sync + 'static {
    /// Fetches the current rate table for one base currency.
    async fn latest_rates(&self, base: Currency) -> Result<RateTable, ProviderError>;

    /// Fetches the rate table for one base currency on an exact past date.
    async fn historical_rates(
        &self,
        base: Currency,
        date: NaiveDate,
    ) -> Result<RateTable, ProviderError>;
}
