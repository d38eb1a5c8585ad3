//! Client example demonstrating rate lookups against a running server.
//!
//! The upstream provider is scripted, so the example runs without network
//! access or an API key.
//!
//! Run with: cargo run -p rates-app --example client_example

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rates_client::RatesClient;
use rates_hex::{RateCache, RateService, RefreshScheduler, inbound::HttpServer};
use rates_types::{Currency, ProviderError, RateProvider, RateTable};
use tokio::net::TcpListener;

/// Scripted provider deriving cross rates from a fixed USD quote table.
struct DemoProvider;

fn demo_rates(base: Currency) -> HashMap<String, f64> {
    let mut rates: HashMap<String, f64> = [
        ("USD", 1.0),
        ("EUR", 0.9),
        ("GBP", 0.78),
        ("INR", 83.2),
        ("JPY", 148.5),
    ]
    .iter()
    .map(|(c, r)| (c.to_string(), *r))
    .collect();

    let per_base = rates[base.code()];
    for value in rates.values_mut() {
        *value /= per_base;
    }
    rates
}

#[async_trait]
impl RateProvider for DemoProvider {
    async fn latest_rates(&self, base: Currency) -> Result<RateTable, ProviderError> {
        Ok(RateTable::new(base, demo_rates(base)))
    }

    async fn historical_rates(
        &self,
        base: Currency,
        _date: NaiveDate,
    ) -> Result<RateTable, ProviderError> {
        // Same table nudged down, standing in for a dated payload.
        let dated = demo_rates(base)
            .into_iter()
            .map(|(code, rate)| (code, rate * 0.98))
            .collect();
        Ok(RateTable::new(base, dated))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Find an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr: SocketAddr = listener.local_addr()?;
    let port = addr.port();
    drop(listener);

    println!("🚀 Starting server on port {port}...");

    // Assemble the stack over the scripted provider
    let cache = RateCache::new(Duration::from_secs(60));
    let service = Arc::new(RateService::new(DemoProvider, cache));

    let scheduler = RefreshScheduler::new(Arc::clone(&service), Duration::from_secs(60));
    let scheduler_handle = scheduler.start();

    let server = HttpServer::new(service);
    let router = server.router();

    let server_addr = format!("127.0.0.1:{port}");
    tokio::spawn(async move {
        axum::serve(
            TcpListener::bind(&server_addr).await.unwrap(),
            router.into_make_service(),
        )
        .await
        .unwrap();
    });

    // Wait for server to start
    tokio::time::sleep(Duration::from_millis(500)).await;

    // Create client
    let base_url = format!("http://127.0.0.1:{port}");
    let client = RatesClient::new(&base_url);

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: rate lookups and conversion
    // ─────────────────────────────────────────────────────────────────────────

    // Health check
    let health = client.health().await?;
    println!("✅ Server health: {health}");

    // Latest rate; the cache is already warm from the scheduler's first pass
    let rate = client.latest("USD", "EUR").await?;
    println!("✅ Latest {} to {}: {}", rate.from, rate.to, rate.rate);

    // Convert an amount at the latest rate
    let conv = client.convert("USD", "INR", 250.0, None).await?;
    println!(
        "✅ {} {} converts to {:.2} {}",
        conv.amount, conv.from, conv.converted, conv.to
    );

    // Historical rate from last week
    let last_week = Utc::now().date_naive() - chrono::Duration::days(7);
    let dated = client.historical("USD", "GBP", last_week).await?;
    println!(
        "✅ {} {} to {}: {}",
        last_week, dated.from, dated.to, dated.rate
    );

    // Dated conversion
    let dated_conv = client.convert("EUR", "JPY", 40.0, Some(last_week)).await?;
    println!(
        "✅ {} {} on {} converts to {:.2} {}",
        dated_conv.amount, dated_conv.from, last_week, dated_conv.converted, dated_conv.to
    );

    // Stop the refresh loop before exit
    scheduler_handle.stop().await;

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
