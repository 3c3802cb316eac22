//! Error types for currency summation.

/// Errors raised when resolving a currency from its external code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurrencyError {
    #[error("Unknown currency: {0}")]
    Unknown(String),
}

/// Errors raised when parsing a `Money` value from text such as `"12.5 USD"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoneyParseError {
    #[error("Missing currency code in {0:?}")]
    MissingCurrency(String),

    #[error("Invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error(transparent)]
    Currency(#[from] CurrencyError),
}

/// Errors reported by a rate source.
///
/// The converter never produces these itself; it hands back whatever the
/// injected source returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RateError {
    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Rate not available for {from} -> {to}")]
    RateNotAvailable { from: String, to: String },

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Invalid response from rate service: {0}")]
    InvalidResponse(String),
}

impl RateError {
    /// Shorthand for a missing pair.
    pub fn not_available(from: &str, to: &str) -> Self {
        RateError::RateNotAvailable {
            from: from.to_string(),
            to: to.to_string(),
        }
    }
}
