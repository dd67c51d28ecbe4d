//! Currency
//!
//! Display currency for contribution amounts. Pages that have not configured
//! one yet fall back to US dollars.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A display currency: ISO 4217 code plus symbol
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    /// ISO 4217 code, e.g. "USD"
    pub code: String,

    /// Display symbol, e.g. "$"
    pub symbol: String,
}

impl Default for Currency {
    fn default() -> Self {
        Self {
            code: "USD".into(),
            symbol: "$".into(),
        }
    }
}

impl Currency {
    pub fn new(code: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            symbol: symbol.into(),
        }
    }

    /// Format an amount for display with two decimal places
    pub fn format(&self, amount: Decimal) -> String {
        format!("{}{:.2}", self.symbol, amount)
    }
}
