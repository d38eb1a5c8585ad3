//! Domain models for the exchange rate service.

pub mod currency;
pub mod rates;

pub use currency::Currency;
pub use rates::RateTable;
