//! Exchange Rate Sources
//!
//! Adapters implementing the `RateSource` port from `currency-types`.
//!
//! - [`StaticRateSource`] answers from a built-in table of base rates, for
//!   development, offline use and tests.
//! - [`HttpRateSource`] asks a Frankfurter-compatible JSON API.
//!
//! # Example
//! ```
//! use currency_types::RateSource;
//! use exchange_rates::StaticRateSource;
//!
//! let rates = StaticRateSource::new();
//! let rate = rates.get_rate("USD", "EUR").unwrap();
//! assert!(rate > 0.9 && rate < 0.93);
//! ```

pub mod fixed;
pub mod http;

pub use fixed::StaticRateSource;
pub use http::{DEFAULT_API_URL, HttpRateSource};
