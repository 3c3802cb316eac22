//! Rate source port.
//!
//! This trait defines the interface for exchange rate lookups.
//! Implementations can be HTTP clients, static tables, test fakes, etc.

use std::sync::Arc;

use crate::error::RateError;

/// Port trait for exchange rate sources.
///
/// Lookups are treated as expensive: callers are expected to ask for each
/// pair as rarely as they can.
pub trait RateSource: Send + Sync {
    /// Get the exchange rate from one currency code to another.
    /// Returns how many units of `to` you get for 1 unit of `from`.
    fn get_rate(&self, from: &str, to: &str) -> Result<f64, RateError>;
}

impl<S: RateSource + ?Sized> RateSource for &S {
    fn get_rate(&self, from: &str, to: &str) -> Result<f64, RateError> {
        (**self).get_rate(from, to)
    }
}

impl<S: RateSource + ?Sized> RateSource for Box<S> {
    fn get_rate(&self, from: &str, to: &str) -> Result<f64, RateError> {
        (**self).get_rate(from, to)
    }
}

impl<S: RateSource + ?Sized> RateSource for Arc<S> {
    fn get_rate(&self, from: &str, to: &str) -> Result<f64, RateError> {
        (**self).get_rate(from, to)
    }
}
