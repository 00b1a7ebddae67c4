//! Configuration and delivery validation command handlers.

pub mod config;
pub mod telegram;
