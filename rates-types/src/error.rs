//! Error types for the exchange rate service.

use chrono::NaiveDate;

use crate::ports::ProviderError;

/// Errors surfaced by the rate service.
///
/// Cache-internal miss/expiry signals never appear here; a miss always turns
/// into a provider fetch, and only that fetch can fail.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Code is not in the static supported set. Client error, never retried.
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    /// Historical date is further back than the provider keeps data for.
    #[error("Date {0} too old: only the last 90 days are allowed")]
    DateOutOfRange(NaiveDate),

    /// Target code missing from an otherwise successful provider response.
    #[error("Rate not found for currency: {0}")]
    RateNotFound(String),

    /// Network error, timeout, non-OK status, or provider-reported error.
    #[error(transparent)]
    Upstream(#[from] ProviderError),
}
