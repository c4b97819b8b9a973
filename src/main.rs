use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::Level;

use chain_prefix_cli::cli::{Cli, Command};
use chain_prefix_cli::commands;

#[tokio::main]
async fn main() -> ExitCode {
	let cli = Cli::parse();

	let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
	tracing_subscriber::fmt()
		.with_writer(std::io::stderr)
		.with_max_level(level)
		.init();

	// Picks up ATTESTATION_REGISTRY_ADDRESS from a .env in this or a parent directory.
	match dotenvy::dotenv() {
		Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
		Err(e) if e.not_found() => {}
		Err(e) => tracing::warn!("ignoring unreadable .env: {e}"),
	}

	match run(&cli).await {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("Error: {e:#}");
			ExitCode::FAILURE
		}
	}
}

async fn run(cli: &Cli) -> Result<()> {
	match &cli.command {
		Command::Update => commands::update::run(cli).await,
		Command::Show { chain_id } => commands::prefix::show(*chain_id),
		Command::List => commands::prefix::list(),
		Command::Config { command } => commands::config::run(cli, command),
	}
}
