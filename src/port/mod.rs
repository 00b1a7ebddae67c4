//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the valuation run and the outside world.
//! Adapters implement them to integrate with market-data providers and
//! messaging services; tests implement them with scripted fakes.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ Quote   │            │   Clock     │              │ Notifier  │
//! │ Adapter │            │             │              │  Adapter  │
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`QuoteSource`] - Latest closing price per ticker
//! - [`Notifier`] - Report delivery (Telegram, logging)
//! - [`Clock`] - Wall-clock time for report headers

pub mod outbound;

pub use outbound::clock::{Clock, SystemClock};
pub use outbound::notifier::{LogNotifier, Notifier};
pub use outbound::quote::{PriceQuote, QuoteSource};
