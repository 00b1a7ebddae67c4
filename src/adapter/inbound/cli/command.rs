//! Command-line interface definitions.
//!
//! Defines the CLI structure for the yieldwatch application using `clap`.
//! The CLI supports a one-shot valuation run, diagnostic checks, and a
//! read-only view of the configured watchlist.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Dividend-yield valuation checker with Telegram alerts
#[derive(Parser, Debug)]
#[command(name = "yieldwatch")]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (built-in watchlist if absent)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the yieldwatch CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate the watchlist once and notify on buy signals
    Run(RunArgs),

    /// Run diagnostic checks
    #[command(subcommand)]
    Check(CheckCommand),

    /// Show the watchlist with computed cheap prices
    Watchlist,
}

/// Subcommands for `yieldwatch check`.
///
/// Provides diagnostic commands to verify setup before scheduling runs.
#[derive(Subcommand, Debug)]
pub enum CheckCommand {
    /// Validate the configuration file syntax and semantics.
    Config,
    /// Test Telegram notification delivery.
    Telegram,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug, Default)]
pub struct RunArgs {
    /// Log the report instead of sending it to Telegram.
    #[arg(long)]
    pub dry_run: bool,

    /// Override log level (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Use JSON log format instead of pretty-printed logs.
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run_with_flags() {
        let cli = Cli::try_parse_from([
            "yieldwatch",
            "--config",
            "custom.toml",
            "run",
            "--dry-run",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        match cli.command {
            Commands::Run(args) => {
                assert!(args.dry_run);
                assert_eq!(args.log_level.as_deref(), Some("debug"));
                assert!(!args.json_logs);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_config_defaults_to_working_directory() {
        let cli = Cli::try_parse_from(["yieldwatch", "watchlist"]).unwrap();
        assert_eq!(cli.config, PathBuf::from(DEFAULT_CONFIG_PATH));
        assert!(matches!(cli.command, Commands::Watchlist));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["yieldwatch", "check", "config", "--json", "-q"]).unwrap();
        assert!(cli.json);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Check(CheckCommand::Config)));
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["yieldwatch", "trade"]).is_err());
    }
}
