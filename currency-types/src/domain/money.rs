//! Monetary value with embedded currency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::Currency;
use crate::error::MoneyParseError;

/// An immutable amount expressed in one currency.
///
/// Amounts are plain `f64`; no sign, magnitude or rounding rules apply.
/// Two values are equal when both the amount and the currency are equal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Money {
    amount: f64,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value.
    pub fn new(amount: f64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a zero-value Money for the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0.0, currency)
    }

    /// Returns the amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.amount, self.currency)
    }
}

/// Parses `"<amount> <CODE>"` or `"<amount><CODE>"`, e.g. `"12.5 usd"`.
impl FromStr for Money {
    type Err = MoneyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let split = input
            .find(|c: char| c.is_ascii_alphabetic())
            .ok_or_else(|| MoneyParseError::MissingCurrency(s.to_string()))?;
        let (amount, code) = input.split_at(split);

        let amount = amount.trim();
        let amount: f64 = amount
            .parse()
            .map_err(|_| MoneyParseError::InvalidAmount(amount.to_string()))?;
        let currency: Currency = code.parse()?;

        Ok(Money::new(amount, currency))
    }
}
