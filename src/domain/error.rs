//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors that validate inputs.
//!
//! # Examples
//!
//! ```
//! use yieldwatch::domain::error::DomainError;
//! use yieldwatch::domain::watchlist::WatchlistEntry;
//! use rust_decimal_macros::dec;
//!
//! let result = WatchlistEntry::try_new("00878.TW", "High Dividend ETF", dec!(0.55), 4, dec!(0));
//!
//! assert!(matches!(result, Err(DomainError::TargetYieldOutOfRange { .. })));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Ticker symbols must not be blank.
    #[error("ticker cannot be empty")]
    EmptyTicker,

    /// Per-distribution dividend must be positive.
    #[error("dividend for {ticker} must be positive, got {dividend}")]
    NonPositiveDividend {
        /// The offending ticker.
        ticker: String,
        /// The invalid dividend that was provided.
        dividend: Decimal,
    },

    /// Distribution frequency must be at least one per year.
    #[error("distribution frequency for {ticker} must be at least 1")]
    ZeroFrequency {
        /// The offending ticker.
        ticker: String,
    },

    /// Target yield must lie strictly between 0 and 1.
    #[error("target yield for {ticker} must be between 0 and 1 (exclusive), got {target_yield}")]
    TargetYieldOutOfRange {
        /// The offending ticker.
        ticker: String,
        /// The invalid target yield that was provided.
        target_yield: Decimal,
    },

    /// The derived annual dividend or cheap price does not fit in a decimal.
    #[error("dividend parameters for {ticker} are out of range")]
    ValuationOverflow {
        /// The offending ticker.
        ticker: String,
    },

    /// A watchlist must monitor at least one security.
    #[error("watchlist cannot be empty")]
    EmptyWatchlist,

    /// Tickers are the watchlist key and must be unique.
    #[error("duplicate ticker in watchlist: {ticker}")]
    DuplicateTicker {
        /// The repeated ticker.
        ticker: String,
    },
}
