//! Domain models for currency summation.

pub mod currency;
pub mod money;

pub use currency::Currency;
pub use money::Money;
