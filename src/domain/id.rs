//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Exchange-qualified ticker symbol (e.g. `00878.TW`) - newtype for type safety.
///
/// Surrounding whitespace is stripped on construction; the symbol is otherwise
/// passed to the quote provider as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Create a new `Ticker` from a string.
    pub fn new(symbol: impl Into<String>) -> Self {
        let symbol: String = symbol.into();
        Self(symbol.trim().to_string())
    }

    /// Get the ticker as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the symbol is empty after trimming.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Ticker {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Ticker {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_trims_whitespace() {
        let ticker = Ticker::new("  0056.TW ");
        assert_eq!(ticker.as_str(), "0056.TW");
        assert_eq!(ticker.to_string(), "0056.TW");
    }

    #[test]
    fn blank_ticker_is_empty() {
        assert!(Ticker::from("   ").is_empty());
        assert!(!Ticker::from("00878.TW").is_empty());
    }
}
