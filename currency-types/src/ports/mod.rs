//! Port traits (interfaces for adapters).
//!
//! The converter depends on these traits, not on concrete rate sources.

mod rates;

pub use rates::RateSource;
