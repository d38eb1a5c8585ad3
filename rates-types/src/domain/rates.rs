//! Rate tables as returned by providers and held in the cache.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Currency;

/// Conversion rates quoted against one unit of a single base currency.
///
/// A table is produced atomically by one provider fetch and is never mutated
/// afterwards; refreshes replace it wholesale. Rates are non-negative per the
/// provider contract. Keys are upper-case ISO codes and may cover far more
/// currencies than the supported base set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateTable {
    base: Currency,
    rates: HashMap<String, f64>,
}

impl RateTable {
    pub fn new(base: Currency, rates: HashMap<String, f64>) -> Self {
        Self { base, rates }
    }

    /// The base currency the quotes are expressed against.
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Looks up the rate for a target code, case-insensitively.
    pub fn rate_for(&self, code: &str) -> Option<f64> {
        self.rates.get(&code.to_uppercase()).copied()
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
