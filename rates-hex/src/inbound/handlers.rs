//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use utoipa::OpenApi;

use rates_types::{ConvertResponse, RateProvider, RateResponse, ServiceError};

use crate::RateService;
use crate::openapi::ApiDoc;

/// Application state shared across handlers.
pub struct AppState<P: RateProvider> {
    pub service: Arc<RateService<P>>,
}

/// Error envelope for every handler. Service errors carry their own status
/// mapping; parse failures in the handlers become plain 400s.
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let status = match &err {
            ServiceError::UnsupportedCurrency(_)
            | ServiceError::DateOutOfRange(_)
            | ServiceError::RateNotFound(_) => StatusCode::BAD_REQUEST,
            ServiceError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.message,
            "code": self.status.as_u16()
        });

        (self.status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Serves the generated OpenAPI document.
pub async fn openapi_spec() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Query parameters for `/latest`.
#[derive(Debug, serde::Deserialize)]
pub struct LatestParams {
    pub from: String,
    pub to: String,
}

/// Latest rate between two currencies.
#[tracing::instrument(skip(state))]
pub async fn latest<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    Query(params): Query<LatestParams>,
) -> Result<impl IntoResponse, ApiError> {
    let table = state.service.get_latest_rates(&params.from).await?;
    let rate = table
        .rate_for(&params.to)
        .ok_or_else(|| ServiceError::RateNotFound(params.to.to_uppercase()))?;

    Ok(Json(RateResponse {
        from: params.from.to_uppercase(),
        to: params.to.to_uppercase(),
        rate,
    }))
}

/// Query parameters for `/convert`.
#[derive(Debug, serde::Deserialize)]
pub struct ConvertParams {
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub date: Option<String>,
}

/// Convert an amount between two currencies, today or on a past date.
#[tracing::instrument(skip(state))]
pub async fn convert<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    Query(params): Query<ConvertParams>,
) -> Result<impl IntoResponse, ApiError> {
    if !params.amount.is_finite() || params.amount < 0.0 {
        return Err(ApiError::bad_request("Invalid amount"));
    }

    let rate = match &params.date {
        None => {
            let table = state.service.get_latest_rates(&params.from).await?;
            table
                .rate_for(&params.to)
                .ok_or_else(|| ServiceError::RateNotFound(params.to.to_uppercase()))?
        }
        Some(raw) => {
            let date = parse_date(raw)?;
            state
                .service
                .get_historical_rate(&params.from, &params.to, date)
                .await?
        }
    };

    Ok(Json(ConvertResponse {
        from: params.from.to_uppercase(),
        to: params.to.to_uppercase(),
        amount: params.amount,
        converted: params.amount * rate,
    }))
}

/// Query parameters for `/historical`.
#[derive(Debug, serde::Deserialize)]
pub struct HistoricalParams {
    pub from: String,
    pub to: String,
    pub date: String,
}

/// Rate between two currencies on a past date.
#[tracing::instrument(skip(state))]
pub async fn historical<P: RateProvider>(
    State(state): State<Arc<AppState<P>>>,
    Query(params): Query<HistoricalParams>,
) -> Result<impl IntoResponse, ApiError> {
    let date = parse_date(&params.date)?;
    let rate = state
        .service
        .get_historical_rate(&params.from, &params.to, date)
        .await?;

    Ok(Json(RateResponse {
        from: params.from.to_uppercase(),
        to: params.to.to_uppercase(),
        rate,
    }))
}

fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| ApiError::bad_request("Invalid date format. Use YYYY-MM-DD"))
}
