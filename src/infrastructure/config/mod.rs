//! Infrastructure configuration modules.

pub mod logging;
pub mod settings;
pub mod telegram;
pub mod valuation;
pub mod watchlist;
