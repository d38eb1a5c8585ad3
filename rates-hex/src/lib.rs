//! # Rates Hex
//!
//! Application service layer and HTTP adapter for the exchange rate service.
//!
//! ## Architecture
//!
//! - `cache` - TTL cache for rate tables, keyed by base currency
//! - `service` - Application service (cache-aside reads over the provider port)
//! - `scheduler` - Background loop that keeps the cache warm
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `P: RateProvider`, allowing different
//! provider implementations to be injected.

pub mod cache;
pub mod inbound;
pub mod openapi;
pub mod scheduler;
pub mod service;


pub use cache::{CacheMiss, RateCache};
pub use scheduler::{RefreshScheduler, SchedulerHandle};
pub use service::RateService;
