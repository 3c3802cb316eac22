//! Currency Converter Service
//!
//! Folds a list of amounts into one total, looking up each foreign
//! currency's rate through the injected `RateSource` port.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use currency_types::{Currency, Money, RateError, RateSource};

/// Application service for mixed-currency summation.
///
/// Holds nothing but the rate source. Rates resolved during one `sum` call
/// are forgotten when the call returns.
pub struct CurrencyConverter<S: RateSource> {
    source: S,
}

impl<S: RateSource> CurrencyConverter<S> {
    /// Creates a new converter backed by the given rate source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Returns a reference to the underlying rate source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Sums `amounts` into a single value in `target`.
    ///
    /// Amounts already in `target` are added as-is. Every other currency
    /// costs exactly one call to the rate source, however many amounts
    /// share it. Lookups run in input order and the first error is
    /// returned unchanged.
    #[tracing::instrument(skip_all, fields(to = %target, count = amounts.len()))]
    pub fn sum(&self, target: Currency, amounts: &[Money]) -> Result<Money, RateError> {
        if amounts.is_empty() {
            return Ok(Money::zero(target));
        }

        let mut rates: HashMap<Currency, f64> = HashMap::new();
        let mut total = 0.0;

        for money in amounts {
            let currency = money.currency();
            if currency == target {
                total += money.amount();
                continue;
            }

            let rate = match rates.entry(currency) {
                Entry::Occupied(entry) => {
                    tracing::trace!(from = %currency, "reusing rate");
                    *entry.get()
                }
                Entry::Vacant(entry) => {
                    let rate = self.source.get_rate(currency.code(), target.code())?;
                    tracing::debug!(from = %currency, to = %target, rate, "resolved rate");
                    *entry.insert(rate)
                }
            };

            total += money.amount() * rate;
        }

        Ok(Money::new(total, target))
    }

    /// Converts a single amount into `target`.
    pub fn convert(&self, money: Money, target: Currency) -> Result<Money, RateError> {
        self.sum(target, &[money])
    }
}
