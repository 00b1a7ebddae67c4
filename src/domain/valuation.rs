//! Dividend-yield valuation.
//!
//! A security is "cheap" when its price is low enough that the expected
//! annual dividend meets the configured target yield:
//!
//! ```text
//! annual_dividend = single_dividend × frequency
//! cheap_price     = annual_dividend / target_yield
//! current_yield   = annual_dividend / price × 100
//! ```
//!
//! # Example
//!
//! ```
//! use yieldwatch::domain::valuation::evaluate;
//! use yieldwatch::domain::watchlist::WatchlistEntry;
//! use rust_decimal_macros::dec;
//!
//! let entry = WatchlistEntry::try_new("00878.TW", "Cathay ESG High Dividend", dec!(0.55), 4, dec!(0.09))
//!     .unwrap();
//! let result = evaluate(&entry, Some(dec!(19.00))).unwrap();
//!
//! assert!(result.is_buy_signal);
//! assert_eq!(result.current_yield.round_dp(2), dec!(11.58));
//! ```

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::money::Price;
use super::watchlist::WatchlistEntry;

/// How a price exactly equal to the cheap price is classified.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThresholdPolicy {
    /// `price <= cheap_price` is a buy.
    #[default]
    Inclusive,
    /// `price < cheap_price` is a buy.
    Exclusive,
}

impl ThresholdPolicy {
    /// Apply the policy to a price and threshold.
    #[must_use]
    pub fn is_buy(self, price: Decimal, cheap_price: Decimal) -> bool {
        match self {
            Self::Inclusive => price <= cheap_price,
            Self::Exclusive => price < cheap_price,
        }
    }
}

impl fmt::Display for ThresholdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Inclusive => write!(f, "inclusive"),
            Self::Exclusive => write!(f, "exclusive"),
        }
    }
}

/// Derived valuation numbers for one security at one price.
///
/// All values are unrounded; round with
/// [`round_for_display`](super::money::round_for_display) when rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValuationResult {
    /// Price the valuation was computed at.
    pub price: Price,
    /// `single_dividend × frequency`.
    pub annual_dividend: Decimal,
    /// Buy threshold: `annual_dividend / target_yield`.
    pub cheap_price: Price,
    /// Yield at `price`, in percent.
    pub current_yield: Decimal,
    /// Whether `price` has reached the buy threshold.
    pub is_buy_signal: bool,
    /// `|cheap_price - price|`, for display only.
    pub gap: Decimal,
}

/// Evaluate an entry at a price using the inclusive threshold.
///
/// Returns `None` when there is no price or the price is not positive.
#[must_use]
pub fn evaluate(entry: &WatchlistEntry, price: Option<Price>) -> Option<ValuationResult> {
    evaluate_with(entry, price, ThresholdPolicy::Inclusive)
}

/// Evaluate an entry at a price with an explicit threshold policy.
///
/// Also returns `None` when the price is so small that the current yield
/// overflows the decimal range.
#[must_use]
pub fn evaluate_with(
    entry: &WatchlistEntry,
    price: Option<Price>,
    policy: ThresholdPolicy,
) -> Option<ValuationResult> {
    let price = price.filter(|p| *p > Decimal::ZERO)?;

    let annual_dividend = entry.annual_dividend();
    let cheap_price = entry.cheap_price();
    let current_yield = annual_dividend
        .checked_div(price)?
        .checked_mul(Decimal::ONE_HUNDRED)?;
    let gap = cheap_price.checked_sub(price)?.abs();

    Some(ValuationResult {
        price,
        annual_dividend,
        cheap_price,
        current_yield,
        is_buy_signal: policy.is_buy(price, cheap_price),
        gap,
    })
}
