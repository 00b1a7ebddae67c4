//! Builders for domain primitives used across tests.
//!
//! Entries are built through the validating constructors, so these panic on
//! invalid input rather than returning errors.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::{Watchlist, WatchlistEntry};

/// Create an entry with the display name equal to the ticker.
pub fn entry(ticker: &str, single_dividend: Decimal, frequency: u32, target_yield: Decimal) -> WatchlistEntry {
    WatchlistEntry::try_new(ticker, ticker, single_dividend, frequency, target_yield)
        .expect("valid test entry")
}

/// Quarterly payer with a 0.55 dividend and a 9% target (cheap price ≈ 24.44).
pub fn quarterly_entry(ticker: &str) -> WatchlistEntry {
    entry(ticker, dec!(0.55), 4, dec!(0.09))
}

/// Build a watchlist from entries.
pub fn watchlist(entries: Vec<WatchlistEntry>) -> Watchlist {
    Watchlist::try_new(entries).expect("valid test watchlist")
}

/// Watchlist of quarterly entries for the given tickers, in order.
pub fn quarterly_watchlist(tickers: &[&str]) -> Watchlist {
    watchlist(tickers.iter().map(|t| quarterly_entry(t)).collect())
}
