//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use rates_types::domain::Currency;
use rates_types::dto::{ConvertResponse, RateResponse};
use utoipa::OpenApi;

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy"}))
    )
)]
async fn health() {}

/// Latest exchange rate between two currencies
#[utoipa::path(
    get,
    path = "/latest",
    tag = "rates",
    params(
        ("from" = String, Query, description = "Base currency code, e.g. USD"),
        ("to" = String, Query, description = "Target currency code, e.g. EUR")
    ),
    responses(
        (status = 200, description = "Latest rate", body = RateResponse),
        (status = 400, description = "Unknown currency or missing parameters"),
        (status = 500, description = "Upstream provider failure")
    )
)]
async fn latest() {}

/// Convert an amount between two currencies
#[utoipa::path(
    get,
    path = "/convert",
    tag = "rates",
    params(
        ("from" = String, Query, description = "Base currency code"),
        ("to" = String, Query, description = "Target currency code"),
        ("amount" = f64, Query, description = "Amount to convert; must be non-negative"),
        ("date" = Option<String>, Query, description = "Optional date (YYYY-MM-DD) within the last 90 days; defaults to the latest rate")
    ),
    responses(
        (status = 200, description = "Converted amount", body = ConvertResponse),
        (status = 400, description = "Invalid amount, date, or currency"),
        (status = 500, description = "Upstream provider failure")
    )
)]
async fn convert() {}

/// Exchange rate between two currencies on a past date
#[utoipa::path(
    get,
    path = "/historical",
    tag = "rates",
    params(
        ("from" = String, Query, description = "Base currency code"),
        ("to" = String, Query, description = "Target currency code"),
        ("date" = String, Query, description = "Date (YYYY-MM-DD) within the last 90 days")
    ),
    responses(
        (status = 200, description = "Historical rate", body = RateResponse),
        (status = 400, description = "Invalid date or currency"),
        (status = 500, description = "Upstream provider failure")
    )
)]
async fn historical() {}

/// OpenAPI documentation for the Exchange Rate API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Exchange Rate Service API",
        version = "1.0.0",
        description = "Currency exchange rates over HTTP, backed by a TTL cache and a background refresh loop.\n\nRates come from exchangerate-api.com and are cached per base currency; historical lookups reach back at most 90 days.",
        license(name = "MIT"),
    ),
    paths(health, latest, convert, historical),
    components(
        schemas(
            RateResponse,
            ConvertResponse,
            Currency,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "rates", description = "Exchange rate lookup and conversion"),
    )
)]
pub struct ApiDoc;
