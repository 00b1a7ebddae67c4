//! Notifier port for report delivery.
//!
//! A notifier receives the fully rendered report text. Delivery is attempted
//! once; callers log failures and move on.

use async_trait::async_trait;
use tracing::info;

use crate::error::Result;

/// Trait for notification channels.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `send` is awaited by the run; it should respect the transport's own timeouts
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Channel name for logging.
    fn name(&self) -> &'static str;

    /// Deliver a message.
    async fn send(&self, message: &str) -> Result<()>;
}

/// A logging notifier that writes the message via tracing.
///
/// Used for dry runs so the report can be inspected without delivering it.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, message: &str) -> Result<()> {
        info!(chars = message.chars().count(), "Notification (dry run)");
        for line in message.lines() {
            info!(target: "yieldwatch::report", "{line}");
        }
        Ok(())
    }
}
