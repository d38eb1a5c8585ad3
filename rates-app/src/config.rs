//! Configuration loading from environment.

use std::env;
use std::time::Duration;

/// Application configuration.
pub struct Config {
    pub port: u16,
    pub api_key: String,
    pub api_url: String,
    pub cache_ttl: Duration,
    pub refresh_interval: Duration,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> anyhow::Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()?;

        let api_key = env::var("EXCHANGE_RATE_API_KEY").map_err(|_| {
            anyhow::anyhow!("EXCHANGE_RATE_API_KEY environment variable is required")
        })?;

        let api_url = env::var("EXCHANGE_RATE_API_URL")
            .unwrap_or_else(|_| "https://v6.exchangerate-api.com/v6".to_string());

        let cache_ttl = duration_var("CACHE_TTL_SECS", 3600)?;
        let refresh_interval = duration_var("REFRESH_INTERVAL_SECS", 3600)?;

        Ok(Self {
            port,
            api_key,
            api_url,
            cache_ttl,
            refresh_interval,
        })
    }
}

fn duration_var(name: &str, default_secs: u64) -> anyhow::Result<Duration> {
    let secs = match env::var(name) {
        Ok(raw) => raw.parse()?,
        Err(_) => default_secs,
    };
    Ok(Duration::from_secs(secs))
}
