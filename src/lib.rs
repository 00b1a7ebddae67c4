//! Yieldwatch - dividend-yield valuation checker with Telegram alerts.
//!
//! For each security on a watchlist, the latest close is compared against a
//! "cheap price" derived from its dividend and a target yield:
//!
//! ```text
//! cheap_price = single_dividend × frequency / target_yield
//! ```
//!
//! A single Telegram message is sent when at least one security trades at or
//! below its cheap price.
//!
//! # Architecture
//!
//! - [`domain`] - Watchlist entries and the pure valuation rule
//! - [`port`] - Traits for quote sources, notifiers, and the clock
//! - [`application`] - The run orchestrator and report rendering
//! - [`adapter`] - Yahoo Finance quotes, Telegram delivery, and the CLI
//! - [`infrastructure`] - Configuration loading and runtime wiring
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `telegram` (default) - Telegram notifier via `teloxide`
//! - `testkit` - Test doubles for integration tests
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use yieldwatch::domain::{evaluate, WatchlistEntry};
//!
//! let entry = WatchlistEntry::try_new("00878.TW", "ESG High Dividend", dec!(0.55), 4, dec!(0.09))
//!     .unwrap();
//! let result = evaluate(&entry, Some(dec!(19.00))).unwrap();
//! assert!(result.is_buy_signal);
//! assert_eq!(result.annual_dividend, dec!(2.20));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
