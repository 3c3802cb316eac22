//! fxsum
//!
//! Sums amounts given in any supported currency into one target currency:
//!
//! ```text
//! fxsum EUR "2 USD" "1.5 GBP" 10EUR --json
//! ```
//!
//! Negative amounts go after `--` so they are not read as flags:
//!
//! ```text
//! fxsum EUR "2 USD" -- "-1.5 GBP"
//! ```

mod config;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use currency_converter::CurrencyConverter;
use currency_types::{Currency, Money};
use exchange_rates::DEFAULT_API_URL;

use config::{Config, RateSourceKind};

#[derive(Parser)]
#[command(name = "fxsum")]
#[command(author, version, about = "Sum amounts in mixed currencies", long_about = None)]
struct Cli {
    /// Currency of the result (EUR, USD, GBP)
    target: Currency,

    /// Amounts such as "12.5 USD" or 3GBP (negative ones after `--`)
    amounts: Vec<Money>,

    /// Where exchange rates come from
    #[arg(long, value_enum, env = "FXSUM_SOURCE", default_value = "static")]
    source: RateSourceKind,

    /// Base URL of the rate API (http source only)
    #[arg(long, env = "FXSUM_API_URL", default_value = DEFAULT_API_URL)]
    api_url: String,

    /// Per-request timeout for the rate API, in seconds
    #[arg(long, env = "FXSUM_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,converter_cli=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = Config::new(cli.source, cli.api_url, cli.timeout_secs)?;
    tracing::info!(
        source = ?config.source,
        "Summing {} amount(s) into {}",
        cli.amounts.len(),
        cli.target
    );

    let converter = CurrencyConverter::new(config.build_source()?);
    let total = converter
        .sum(cli.target, &cli.amounts)
        .with_context(|| format!("Failed to sum amounts into {}", cli.target))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&total)?);
    } else {
        println!("{total}");
    }

    Ok(())
}
