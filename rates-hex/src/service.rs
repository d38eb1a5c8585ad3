//! Rate Application Service
//!
//! Orchestrates cache-aside reads through the provider port.
//! Contains NO transport logic - pure rate orchestration.

use chrono::{Duration, NaiveDate, NaiveTime, Utc};

use rates_types::{Currency, RateProvider, RateTable, ServiceError};

use crate::cache::RateCache;

/// Oldest date, relative to now, that a historical lookup will accept.
const HISTORY_WINDOW_DAYS: i64 = 90;

/// Application service for exchange rate operations.
///
/// Generic over `P: RateProvider` - the adapter is injected at compile time.
/// This enables:
/// - Swapping rate sources without code changes
/// - Testing with a scripted provider
/// - Compile-time checks for port implementation
///
/// The cache is constructed by the caller and handed in, so there is exactly
/// one cache instance per process and no ambient state.
pub struct RateService<P: RateProvider> {
    provider: P,
    cache: RateCache,
}

impl<P: RateProvider> RateService<P> {
    /// Creates a new rate service over the given provider and cache.
    pub fn new(provider: P, cache: RateCache) -> Self {
        Self { provider, cache }
    }

    /// Returns a reference to the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Returns a reference to the cache.
    pub fn cache(&self) -> &RateCache {
        &self.cache
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Latest Rates
    // ─────────────────────────────────────────────────────────────────────────────

    /// Returns the full rate table for `base`, serving from the cache when
    /// fresh and fetching from the provider otherwise.
    ///
    /// A provider failure propagates unchanged and leaves the cache exactly
    /// as it was; a stale entry is never served in its place.
    #[tracing::instrument(skip(self))]
    pub async fn get_latest_rates(&self, base: &str) -> Result<RateTable, ServiceError> {
        let base = parse_currency(base)?;
        self.latest_table(base).await
    }

    /// Cache-aside read path shared by the latest and same-day historical
    /// lookups.
    async fn latest_table(&self, base: Currency) -> Result<RateTable, ServiceError> {
        match self.cache.get(base) {
            Ok(table) => {
                tracing::debug!(base = %base, "Cache hit");
                return Ok(table);
            }
            Err(miss) => {
                tracing::debug!(base = %base, ?miss, "Cache miss");
            }
        }

        let table = self.provider.latest_rates(base).await?;
        self.cache.set(base, table.clone());
        Ok(table)
    }

    // ─────────────────────────────────────────────────────────────────────────────
    // Historical Rates
    // ─────────────────────────────────────────────────────────────────────────────

    /// Returns the `from` → `to` conversion rate on `date`.
    ///
    /// Dates more than 90 days in the past are rejected. Today's date reuses
    /// the cached latest-rates path; any other date goes straight to the
    /// provider's historical endpoint and is not cached.
    #[tracing::instrument(skip(self))]
    pub async fn get_historical_rate(
        &self,
        from: &str,
        to: &str,
        date: NaiveDate,
    ) -> Result<f64, ServiceError> {
        let base = parse_currency(from)?;
        let target = parse_currency(to)?;

        let now = Utc::now();
        let age = now - date.and_time(NaiveTime::MIN).and_utc();
        if age > Duration::days(HISTORY_WINDOW_DAYS) {
            return Err(ServiceError::DateOutOfRange(date));
        }

        let table = if date == now.date_naive() {
            self.latest_table(base).await?
        } else {
            self.provider.historical_rates(base, date).await?
        };

        table
            .rate_for(target.code())
            .ok_or_else(|| ServiceError::RateNotFound(target.code().to_string()))
    }
}

fn parse_currency(code: &str) -> Result<Currency, ServiceError> {
    Currency::from_code(code).ok_or_else(|| ServiceError::UnsupportedCurrency(code.to_string()))
}
