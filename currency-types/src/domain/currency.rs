//! Closed set of currencies and their external ISO 4217 codes.
//!
//! Currencies are declared once in the `define_currencies!` invocation at
//! the bottom of this file. The macro generates the enum together with the
//! code lookup in both directions, so adding a currency is a one-line change:
//!
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     Yen => ("JPY", "¥"),
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::CurrencyError;

/// Generates the `Currency` enum and its code/symbol tables.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     VariantName => ("ISO_CODE", "SYMBOL"),
/// }
/// ```
macro_rules! define_currencies {
    (
        $(
            $(#[$meta:meta])*
            $name:ident => ($code:literal, $symbol:literal)
        ),* $(,)?
    ) => {
        /// Currencies supported by the converter.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum Currency {
            $(
                $(#[$meta])*
                #[serde(rename = $code)]
                $name
            ),*
        }

        impl Currency {
            /// Returns the ISO 4217 code used when talking to rate sources.
            pub fn code(&self) -> &'static str {
                match self {
                    $(Currency::$name => $code),*
                }
            }

            /// Returns the currency symbol.
            pub fn symbol(&self) -> &'static str {
                match self {
                    $(Currency::$name => $symbol),*
                }
            }

            /// Every supported currency, in declaration order.
            pub fn all() -> &'static [Currency] {
                &[$(Currency::$name),*]
            }

            /// Resolves a currency from its exact ISO code.
            pub fn from_code(code: &str) -> Result<Self, CurrencyError> {
                match code {
                    $($code => Ok(Currency::$name),)*
                    _ => Err(CurrencyError::Unknown(code.to_string())),
                }
            }
        }
    };
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Currency::from_code(&s.trim().to_uppercase())
            .map_err(|_| CurrencyError::Unknown(s.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS - Add new currencies here!
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    /// Euro
    Euro => ("EUR", "€"),
    /// US Dollar
    Dollar => ("USD", "$"),
    /// Pound Sterling
    Pound => ("GBP", "£"),
}
