//! Rate source configuration.

use std::time::Duration;

use anyhow::Context;
use clap::ValueEnum;
use currency_types::RateSource;
use exchange_rates::{HttpRateSource, StaticRateSource};

/// Which rate source backs the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RateSourceKind {
    /// Built-in table, no network
    Static,
    /// Frankfurter-compatible HTTP API
    Http,
}

/// Application configuration.
#[derive(Debug)]
pub struct Config {
    pub source: RateSourceKind,
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    /// Validates raw settings coming from flags or the environment.
    pub fn new(source: RateSourceKind, api_url: String, timeout_secs: u64) -> anyhow::Result<Self> {
        if timeout_secs == 0 {
            anyhow::bail!("Timeout must be at least one second");
        }
        if source == RateSourceKind::Http && api_url.trim().is_empty() {
            anyhow::bail!("An API URL is required for the http rate source");
        }

        Ok(Self {
            source,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Builds the configured rate source.
    pub fn build_source(&self) -> anyhow::Result<Box<dyn RateSource>> {
        match self.source {
            RateSourceKind::Static => Ok(Box::new(StaticRateSource::new())),
            RateSourceKind::Http => {
                let source = HttpRateSource::new(&self.api_url, self.timeout)
                    .context("Failed to set up the HTTP rate source")?;
                Ok(Box::new(source))
            }
        }
    }
}
