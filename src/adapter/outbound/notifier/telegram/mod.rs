//! Telegram notification delivery.
//!
//! Sends the run report to a single chat through the Bot API.

mod format;

pub mod notifier;

pub use format::format_test_message;
pub use notifier::{TelegramConfig, TelegramNotifier};
