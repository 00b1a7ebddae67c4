//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe infrastructure dependencies: the quote provider,
//! the notification channel, and the clock.

pub mod clock;
pub mod notifier;
pub mod quote;
