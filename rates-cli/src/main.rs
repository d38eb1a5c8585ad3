//! Rates CLI
//!
//! Command-line interface for the Exchange Rate API.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use rates_client::RatesClient;

#[derive(Parser)]
#[command(name = "rates")]
#[command(author, version, about = "Exchange Rate API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Exchange Rate API
    #[arg(long, env = "RATES_API_URL", default_value = "http://localhost:3000")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Latest rate between two currencies
    Latest {
        /// Base currency code (USD, EUR, GBP, INR, JPY)
        from: String,
        /// Target currency code
        to: String,
    },
    /// Convert an amount between two currencies
    Convert {
        /// Base currency code
        from: String,
        /// Target currency code
        to: String,
        /// Amount to convert
        amount: f64,
        /// Date (YYYY-MM-DD) within the last 90 days; defaults to the latest rate
        #[arg(long)]
        date: Option<String>,
    },
    /// Rate between two currencies on a past date
    Historical {
        /// Base currency code
        from: String,
        /// Target currency code
        to: String,
        /// Date (YYYY-MM-DD) within the last 90 days
        date: String,
    },
    /// Check API health
    Health,
}

fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date: {}. Use YYYY-MM-DD", s))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = RatesClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Latest { from, to } => {
            let rate = client.latest(&from, &to).await?;
            println!("{}", serde_json::to_string_pretty(&rate)?);
        }

        Commands::Convert {
            from,
            to,
            amount,
            date,
        } => {
            let date = date.as_deref().map(parse_date).transpose()?;
            let converted = client.convert(&from, &to, amount, date).await?;
            println!("{}", serde_json::to_string_pretty(&converted)?);
        }

        Commands::Historical { from, to, date } => {
            let date = parse_date(&date)?;
            let rate = client.historical(&from, &to, date).await?;
            println!("{}", serde_json::to_string_pretty(&rate)?);
        }
    }

    Ok(())
}
