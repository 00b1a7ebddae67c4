//! Monetary types for price and dividend representation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Price represented as a Decimal for precision.
pub type Price = Decimal;

/// Round a value for display: two places, midpoint away from zero.
///
/// Calculations keep full precision; rounding happens only when text is
/// rendered.
#[must_use]
pub fn round_for_display(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
