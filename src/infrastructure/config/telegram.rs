//! Telegram notification configuration.
//!
//! Credentials never live in the config file; they are read from the
//! environment when the notifier is built.

use serde::Deserialize;

const fn default_true() -> bool {
    true
}

/// Telegram notification configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Enable telegram notifications.
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}
