//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`quote`] - [`ScriptedQuoteSource`](quote::ScriptedQuoteSource) with
//!   per-ticker prices, empty results, and failures.
//! - [`notifier`] - Recording and failing [`Notifier`](crate::port::Notifier)s.
//! - [`clock`] - [`FixedClock`](clock::FixedClock) for deterministic timestamps.
//! - [`domain`] - Builders for watchlist entries and watchlists.

pub mod clock;
pub mod domain;
pub mod notifier;
pub mod quote;
