//! CLI module graph.

pub mod check;
pub mod config;
pub mod command;
pub mod output;
pub mod run;
pub mod watchlist;
