//! # Rates Provider
//!
//! Outbound adapters for the exchange rate service. This crate contains the
//! concrete implementations of the `RateProvider` port defined in
//! `rates-types`, keeping all upstream wire details (URLs, payload shapes,
//! timeouts) out of the core service logic.
//!
//! Currently one adapter is provided: [`ExchangeRateApiClient`], which talks
//! to the exchangerate-api.com v6 REST API.

pub mod exchange_rate_api;

pub use exchange_rate_api::ExchangeRateApiClient;
