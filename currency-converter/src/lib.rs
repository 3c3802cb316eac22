//! # Currency Converter
//!
//! Application service that sums amounts held in different currencies into
//! a single target currency.
//!
//! The converter is generic over `S: RateSource`, so the rate lookup is
//! injected at construction: an HTTP client in production, a static table
//! offline, a recording fake in tests.

pub mod converter;


pub use converter::CurrencyConverter;
