//! Notifier doubles.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::error::{NotifyError, Result};
use crate::port::Notifier;

/// Thread-safe message collector for notification assertions.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// orchestrator owns another.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `send` calls received.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of every message received, in order.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    fn name(&self) -> &'static str {
        "recording"
    }

    async fn send(&self, message: &str) -> Result<()> {
        self.lock().push(message.to_string());
        Ok(())
    }
}

/// A notifier whose every delivery fails, counting attempts.
#[derive(Clone)]
pub struct FailingNotifier {
    reason: String,
    attempts: Arc<Mutex<usize>>,
}

impl FailingNotifier {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
            attempts: Arc::new(Mutex::new(0)),
        }
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl Notifier for FailingNotifier {
    fn name(&self) -> &'static str {
        "failing"
    }

    async fn send(&self, _message: &str) -> Result<()> {
        *self.attempts.lock().unwrap_or_else(PoisonError::into_inner) += 1;
        Err(NotifyError::Delivery(self.reason.clone()).into())
    }
}
