//! # Currency Types
//!
//! Domain types and port traits for multi-currency summation.
//! This crate has ZERO IO dependencies - only data structures and the
//! trait that rate source adapters implement.
//!
//! ## Architecture
//!
//! - `domain/` - Pure domain types (Currency, Money)
//! - `ports/` - Trait definitions that adapters must implement
//! - `error/` - Domain and rate lookup error types

pub mod domain;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{Currency, Money};
pub use error::{CurrencyError, MoneyParseError, RateError};
pub use ports::RateSource;
