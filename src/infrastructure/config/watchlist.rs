//! Watchlist configuration.
//!
//! Entries are declared as an array of tables:
//!
//! ```toml
//! [[watchlist]]
//! ticker = "00878.TW"
//! name = "Cathay ESG High Dividend"
//! single_dividend = 0.55
//! frequency = 4
//! target_yield = 0.09
//! ```

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

use crate::domain::{DomainError, Watchlist, WatchlistEntry};

/// One watchlist entry as written in the config file.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchlistEntryConfig {
    /// Exchange-qualified ticker symbol.
    pub ticker: String,
    /// Human-readable label; defaults to the ticker.
    #[serde(default)]
    pub name: Option<String>,
    /// Dividend paid per distribution.
    pub single_dividend: Decimal,
    /// Distributions per year.
    pub frequency: u32,
    /// Desired annual yield as a fraction (0.09 = 9%).
    pub target_yield: Decimal,
}

impl WatchlistEntryConfig {
    /// Validate into a domain entry.
    ///
    /// # Errors
    ///
    /// Returns the domain validation error for invalid values.
    pub fn to_entry(&self) -> Result<WatchlistEntry, DomainError> {
        let name = self
            .name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| self.ticker.trim().to_string());
        WatchlistEntry::try_new(
            self.ticker.as_str(),
            name,
            self.single_dividend,
            self.frequency,
            self.target_yield,
        )
    }
}

/// Validate a list of configured entries into a [`Watchlist`].
///
/// # Errors
///
/// Returns the first entry error, or a watchlist-level error for an empty
/// list or duplicate tickers.
pub fn build_watchlist(entries: &[WatchlistEntryConfig]) -> Result<Watchlist, DomainError> {
    let entries = entries
        .iter()
        .map(WatchlistEntryConfig::to_entry)
        .collect::<Result<Vec<_>, _>>()?;
    Watchlist::try_new(entries)
}

fn entry(
    ticker: &str,
    name: &str,
    single_dividend: Decimal,
    frequency: u32,
    target_yield: Decimal,
) -> WatchlistEntryConfig {
    WatchlistEntryConfig {
        ticker: ticker.into(),
        name: Some(name.into()),
        single_dividend,
        frequency,
        target_yield,
    }
}

/// Built-in watchlist: three Taiwan high-dividend ETFs paying quarterly,
/// each targeting a 9% yield.
#[must_use]
pub fn default_watchlist() -> Vec<WatchlistEntryConfig> {
    vec![
        entry("00878.TW", "國泰永續高股息", dec!(0.55), 4, dec!(0.09)),
        entry("00919.TW", "群益台灣精選高息", dec!(0.70), 4, dec!(0.09)),
        entry("0056.TW", "元大高股息", dec!(0.866), 4, dec!(0.09)),
    ]
}
