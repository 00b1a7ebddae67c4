//! Watchlist types.
//!
//! - [`WatchlistEntry`] - A monitored security with its dividend parameters
//! - [`Watchlist`] - Ordered, duplicate-free collection of entries

use std::collections::HashSet;

use rust_decimal::Decimal;

use super::error::DomainError;
use super::id::Ticker;

/// A monitored security and the dividend expectations used to value it.
///
/// # Example
///
/// ```
/// use yieldwatch::domain::watchlist::WatchlistEntry;
/// use rust_decimal_macros::dec;
///
/// let entry = WatchlistEntry::try_new("00878.TW", "Cathay ESG High Dividend", dec!(0.55), 4, dec!(0.09))
///     .unwrap();
///
/// assert_eq!(entry.annual_dividend(), dec!(2.20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchlistEntry {
    ticker: Ticker,
    display_name: String,
    single_dividend: Decimal,
    frequency: u32,
    target_yield: Decimal,
    annual_dividend: Decimal,
    cheap_price: Decimal,
}

impl WatchlistEntry {
    /// Create a validated entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the ticker is blank, the dividend is not positive,
    /// the frequency is zero, or the target yield is outside `(0, 1)`.
    pub fn try_new(
        ticker: impl Into<Ticker>,
        display_name: impl Into<String>,
        single_dividend: Decimal,
        frequency: u32,
        target_yield: Decimal,
    ) -> Result<Self, DomainError> {
        let ticker = ticker.into();
        if ticker.is_empty() {
            return Err(DomainError::EmptyTicker);
        }
        if single_dividend <= Decimal::ZERO {
            return Err(DomainError::NonPositiveDividend {
                ticker: ticker.to_string(),
                dividend: single_dividend,
            });
        }
        if frequency == 0 {
            return Err(DomainError::ZeroFrequency {
                ticker: ticker.to_string(),
            });
        }
        if target_yield <= Decimal::ZERO || target_yield >= Decimal::ONE {
            return Err(DomainError::TargetYieldOutOfRange {
                ticker: ticker.to_string(),
                target_yield,
            });
        }

        let Some((annual_dividend, cheap_price)) = single_dividend
            .checked_mul(Decimal::from(frequency))
            .and_then(|annual| Some((annual, annual.checked_div(target_yield)?)))
        else {
            return Err(DomainError::ValuationOverflow {
                ticker: ticker.to_string(),
            });
        };

        Ok(Self {
            ticker,
            display_name: display_name.into(),
            single_dividend,
            frequency,
            target_yield,
            annual_dividend,
            cheap_price,
        })
    }

    #[must_use]
    pub const fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Dividend paid per distribution.
    #[must_use]
    pub const fn single_dividend(&self) -> Decimal {
        self.single_dividend
    }

    /// Number of distributions per year.
    #[must_use]
    pub const fn frequency(&self) -> u32 {
        self.frequency
    }

    /// Desired annual yield as a fraction (0.09 = 9%).
    #[must_use]
    pub const fn target_yield(&self) -> Decimal {
        self.target_yield
    }

    /// Expected dividends over one year.
    #[must_use]
    pub const fn annual_dividend(&self) -> Decimal {
        self.annual_dividend
    }

    /// Price at or below which the annual dividend meets the target yield.
    #[must_use]
    pub const fn cheap_price(&self) -> Decimal {
        self.cheap_price
    }
}

/// Ordered set of watchlist entries keyed by ticker.
///
/// Declaration order is preserved; it only affects report readability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Watchlist {
    entries: Vec<WatchlistEntry>,
}

impl Watchlist {
    /// Create a validated watchlist.
    ///
    /// # Errors
    ///
    /// Returns an error if `entries` is empty or contains a ticker twice.
    pub fn try_new(entries: Vec<WatchlistEntry>) -> Result<Self, DomainError> {
        if entries.is_empty() {
            return Err(DomainError::EmptyWatchlist);
        }

        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if !seen.insert(entry.ticker()) {
                return Err(DomainError::DuplicateTicker {
                    ticker: entry.ticker().to_string(),
                });
            }
        }

        Ok(Self { entries })
    }

    pub fn iter(&self) -> impl Iterator<Item = &WatchlistEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed watchlist; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by ticker.
    #[must_use]
    pub fn get(&self, ticker: &Ticker) -> Option<&WatchlistEntry> {
        self.entries.iter().find(|entry| entry.ticker() == ticker)
    }
}

impl<'a> IntoIterator for &'a Watchlist {
    type Item = &'a WatchlistEntry;
    type IntoIter = std::slice::Iter<'a, WatchlistEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
