//! Provider-agnostic domain logic.
//!
//! - [`watchlist`] - Monitored securities and their dividend parameters
//! - [`valuation`] - Cheap-price evaluation
//! - [`money`] - Price type and display rounding

pub mod error;
pub mod id;
pub mod money;
pub mod valuation;
pub mod watchlist;

pub use error::DomainError;
pub use id::Ticker;
pub use money::{round_for_display, Price};
pub use valuation::{evaluate, evaluate_with, ThresholdPolicy, ValuationResult};
pub use watchlist::{Watchlist, WatchlistEntry};
