//! Static rate table for development and offline use.

use std::collections::HashMap;

use currency_types::{RateError, RateSource};

/// Value of one unit of each currency in US dollars.
///
/// Cross rates are derived through USD, so the table needs one entry per
/// currency rather than one per pair.
const BASE_TO_USD_RATES: &[(&str, f64)] = &[("USD", 1.0), ("EUR", 1.087), ("GBP", 1.266)];

/// Rate source answering from an in-memory table of USD base rates.
#[derive(Debug, Clone)]
pub struct StaticRateSource {
    to_usd: HashMap<String, f64>,
}

impl StaticRateSource {
    /// Creates a source loaded with the built-in base rates.
    pub fn new() -> Self {
        Self {
            to_usd: BASE_TO_USD_RATES
                .iter()
                .map(|&(code, rate)| (code.to_string(), rate))
                .collect(),
        }
    }

    /// Adds or replaces the USD value of one unit of `code`.
    pub fn with_usd_rate(mut self, code: &str, to_usd: f64) -> Self {
        self.to_usd.insert(code.to_uppercase(), to_usd);
        self
    }

    /// Returns the rate from `base` to every currency in the table.
    pub fn all_rates(&self, base: &str) -> Result<HashMap<String, f64>, RateError> {
        self.to_usd
            .keys()
            .map(|code| Ok((code.clone(), self.get_rate(base, code)?)))
            .collect()
    }

    fn usd_value(&self, code: &str) -> Result<f64, RateError> {
        self.to_usd
            .get(&code.to_uppercase())
            .copied()
            .ok_or_else(|| RateError::UnsupportedCurrency(code.to_string()))
    }
}

impl Default for StaticRateSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RateSource for StaticRateSource {
    fn get_rate(&self, from: &str, to: &str) -> Result<f64, RateError> {
        let from_usd = self.usd_value(from)?;
        let to_usd = self.usd_value(to)?;
        if from.eq_ignore_ascii_case(to) {
            return Ok(1.0);
        }
        Ok(from_usd / to_usd)
    }
}
