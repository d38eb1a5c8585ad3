//! Integration tests for the HTTP API.
//!
//! These tests drive the full Axum stack (routing, extractors, error
//! mapping) with a scripted provider, without touching the network.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{NaiveDate, Utc};
use http_body_util::BodyExt;
use rates_hex::{RateCache, RateService, inbound::HttpServer};
use rates_types::{Currency, ProviderError, RateProvider, RateTable};
use tower::ServiceExt;

/// Provider stub with a fixed rate table. JPY is deliberately missing from
/// the payload even though it is a supported code.
struct StubProvider {
    fail: bool,
}

fn stub_rates() -> HashMap<String, f64> {
    [("EUR", 0.9), ("GBP", 0.8), ("INR", 83.0)]
        .iter()
        .map(|(c, r)| (c.to_string(), *r))
        .collect()
}

#[async_trait]
impl RateProvider for StubProvider {
    async fn latest_rates(&self, base: Currency) -> Result<RateTable, ProviderError> {
        if self.fail {
            return Err(ProviderError::Request("connection refused".to_string()));
        }
        Ok(RateTable::new(base, stub_rates()))
    }

    async fn historical_rates(
        &self,
        base: Currency,
        _date: NaiveDate,
    ) -> Result<RateTable, ProviderError> {
        if self.fail {
            return Err(ProviderError::Request("connection refused".to_string()));
        }
        Ok(RateTable::new(base, stub_rates()))
    }
}

/// Helper to build a test router over the stub provider.
fn test_app(fail: bool) -> axum::Router {
    let service = Arc::new(RateService::new(
        StubProvider { fail },
        RateCache::new(Duration::from_secs(3600)),
    ));
    HttpServer::new(service).router()
}

/// Helper to issue a GET and decode the JSON body (Null if not JSON).
async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn days_ago(days: i64) -> String {
    (Utc::now().date_naive() - chrono::Duration::days(days))
        .format("%Y-%m-%d")
        .to_string()
}

#[tokio::test]
async fn test_health_endpoint() {
    let (status, json) = get(test_app(false), "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_latest_returns_rate() {
    let (status, json) = get(test_app(false), "/latest?from=USD&to=EUR").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["from"], "USD");
    assert_eq!(json["to"], "EUR");
    assert_eq!(json["rate"].as_f64().unwrap(), 0.9);
}

#[tokio::test]
async fn test_latest_normalizes_code_case() {
    let (status, json) = get(test_app(false), "/latest?from=usd&to=eur").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["from"], "USD");
    assert_eq!(json["to"], "EUR");
}

#[tokio::test]
async fn test_latest_missing_params_is_bad_request() {
    let (status, _) = get(test_app(false), "/latest?from=USD").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_latest_unknown_base_is_bad_request() {
    let (status, json) = get(test_app(false), "/latest?from=ZZZ&to=EUR").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("Unsupported currency")
    );
}

#[tokio::test]
async fn test_latest_unlisted_target_is_bad_request() {
    // JPY is a valid code but absent from the provider payload.
    let (status, json) = get(test_app(false), "/latest?from=USD&to=JPY").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Rate not found"));
}

#[tokio::test]
async fn test_latest_upstream_failure_is_server_error() {
    let (status, json) = get(test_app(true), "/latest?from=USD&to=EUR").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], 500);
    assert!(json["error"].as_str().is_some());
}

#[tokio::test]
async fn test_convert_multiplies_amount() {
    let (status, json) = get(test_app(false), "/convert?from=USD&to=EUR&amount=100").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["amount"].as_f64().unwrap(), 100.0);
    let converted = json["converted"].as_f64().unwrap();
    assert!((converted - 90.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_convert_rejects_negative_amount() {
    let (status, json) = get(test_app(false), "/convert?from=USD&to=EUR&amount=-5").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Invalid amount"));
}

#[tokio::test]
async fn test_convert_rejects_malformed_date() {
    let (status, json) = get(
        test_app(false),
        "/convert?from=USD&to=EUR&amount=10&date=15-01-2025",
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("Invalid date format")
    );
}

#[tokio::test]
async fn test_convert_rejects_date_beyond_window() {
    let uri = format!(
        "/convert?from=USD&to=EUR&amount=10&date={}",
        days_ago(120)
    );
    let (status, json) = get(test_app(false), &uri).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("too old"));
}

#[tokio::test]
async fn test_convert_with_recent_date() {
    let uri = format!("/convert?from=USD&to=EUR&amount=100&date={}", days_ago(5));
    let (status, json) = get(test_app(false), &uri).await;

    assert_eq!(status, StatusCode::OK);
    let converted = json["converted"].as_f64().unwrap();
    assert!((converted - 90.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_historical_returns_rate() {
    let uri = format!("/historical?from=USD&to=EUR&date={}", days_ago(5));
    let (status, json) = get(test_app(false), &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["from"], "USD");
    assert_eq!(json["to"], "EUR");
    assert_eq!(json["rate"].as_f64().unwrap(), 0.9);
}

#[tokio::test]
async fn test_historical_requires_date() {
    let (status, _) = get(test_app(false), "/historical?from=USD&to=EUR").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let (status, json) = get(test_app(false), "/api-docs/openapi.json").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["openapi"].as_str().unwrap().starts_with("3."));
    assert!(json["paths"]["/latest"].is_object());
}
