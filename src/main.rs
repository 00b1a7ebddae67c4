use clap::Parser;

use yieldwatch::adapter::inbound::cli::command::{CheckCommand, Cli, Commands};
use yieldwatch::adapter::inbound::cli::output::{self, OutputConfig};
use yieldwatch::adapter::inbound::cli::{check, run, watchlist};
use yieldwatch::error::Result;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet));

    if let Err(e) = dispatch(&cli).await {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

async fn dispatch(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Run(args) => run::execute(&cli.config, args).await,
        Commands::Check(CheckCommand::Config) => check::config::execute_config(&cli.config),
        Commands::Check(CheckCommand::Telegram) => {
            check::telegram::execute_telegram(&cli.config).await
        }
        Commands::Watchlist => watchlist::execute(&cli.config),
    }
}
