//! TTL cache for exchange rate tables.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use rates_types::{Currency, RateTable};

/// Why a cache lookup came back empty. Both causes are handled the same way
/// by callers (refetch from the provider); they are distinguished for
/// logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMiss {
    /// No table has ever been stored for this base.
    Absent,
    /// A table is stored but its TTL has lapsed.
    Expired,
}

struct CacheEntry {
    table: RateTable,
    expires_at: Instant,
}

/// Concurrency-safe TTL cache keyed by base currency.
///
/// Each base holds one full rate table with its own expiry deadline; a `set`
/// replaces the whole entry, so readers never observe a partially written
/// table. Expired entries are left in place and ignored by reads until the
/// next successful `set` overwrites them. A single TTL, fixed at
/// construction, applies to every entry.
pub struct RateCache {
    entries: DashMap<Currency, CacheEntry>,
    ttl: Duration,
}

impl RateCache {
    /// Creates an empty cache whose entries live for `ttl` after each write.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Stores a rate table for `base`, resetting its expiry deadline.
    /// Replaces any prior entry wholesale.
    pub fn set(&self, base: Currency, table: RateTable) {
        self.entries.insert(
            base,
            CacheEntry {
                table,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Returns the stored table for `base` if it exists and is still fresh,
    /// or the reason there is nothing to serve. An entry is fresh strictly
    /// before its deadline.
    pub fn get(&self, base: Currency) -> Result<RateTable, CacheMiss> {
        let entry = self.entries.get(&base).ok_or(CacheMiss::Absent)?;
        if Instant::now() >= entry.expires_at {
            return Err(CacheMiss::Expired);
        }
        Ok(entry.table.clone())
    }

    /// True if `base` has no entry or its entry has passed its deadline.
    pub fn is_expired(&self, base: Currency) -> bool {
        match self.entries.get(&base) {
            Some(entry) => Instant::now() >= entry.expires_at,
            None => true,
        }
    }

    /// Number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
