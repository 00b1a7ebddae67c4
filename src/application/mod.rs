//! Application services.
//!
//! - [`orchestrator`] - The single-pass valuation run
//! - [`report`] - Report rendering for the notification channel

pub mod orchestrator;
pub mod report;

pub use orchestrator::{
    NotificationStatus, RunOptions, RunOrchestrator, RunSummary, SkipReason, SkippedEntry,
};
