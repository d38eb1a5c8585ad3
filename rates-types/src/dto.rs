//! Data Transfer Objects (DTOs) for API responses.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Response for a latest or historical rate lookup.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RateResponse {
    /// Base currency code
    #[schema(example = "USD")]
    pub from: String,
    /// Target currency code
    #[schema(example = "EUR")]
    pub to: String,
    /// Units of `to` per one unit of `from`
    #[schema(example = 0.9013)]
    pub rate: f64,
}

/// Response for an amount conversion.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ConvertResponse {
    /// Base currency code
    #[schema(example = "USD")]
    pub from: String,
    /// Target currency code
    #[schema(example = "EUR")]
    pub to: String,
    /// Amount in the base currency
    #[schema(example = 250.0)]
    pub amount: f64,
    /// Amount converted to the target currency
    #[schema(example = 225.32)]
    pub converted: f64,
}
