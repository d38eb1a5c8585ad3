//! # Rates Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the provider adapter and the cache
//! - Create the rate service and the refresh scheduler
//! - Start the HTTP server

mod config;

use std::sync::Arc;

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rates_hex::{RateCache, RateService, RefreshScheduler, inbound::HttpServer};
use rates_provider::ExchangeRateApiClient;

fn init_tracer() -> (sdktrace::Tracer, sdktrace::SdkTracerProvider) {
    global::set_text_map_propagator(TraceContextPropagator::new());

    // Use gRPC exporter with batch processing (non-blocking)
    let exporter = opentelemetry_otlp::SpanExporter::builder()
        .with_tonic()
        .build()
        .expect("failed to create OTLP span exporter");

    let provider = sdktrace::SdkTracerProvider::builder()
        .with_batch_exporter(exporter)
        .build();

    global::set_tracer_provider(provider.clone());

    use opentelemetry::trace::TracerProvider as _;
    (provider.tracer("rates-service"), provider)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize OpenTelemetry tracing
    let (otel_tracer, otel_provider) = init_tracer();
    let telemetry = tracing_opentelemetry::layer().with_tracer(otel_tracer);

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,rates_app=debug,rates_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(telemetry)
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting rates server on port {}", config.port);
    tracing::info!("Using rate provider: {}", config.api_url);

    // Build the provider adapter and the cache
    let provider = ExchangeRateApiClient::with_base_url(config.api_key, config.api_url);
    let cache = RateCache::new(config.cache_ttl);

    // Create the rate service, shared by the scheduler and the HTTP server
    let service = Arc::new(RateService::new(provider, cache));

    // Start the background refresh loop
    let scheduler = RefreshScheduler::new(Arc::clone(&service), config.refresh_interval);
    let scheduler_handle = scheduler.start();

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    // Wait for any in-flight refresh pass before exiting
    scheduler_handle.stop().await;

    // Ensure traces are flushed before exit
    let _ = otel_provider.shutdown();
    Ok(())
}
