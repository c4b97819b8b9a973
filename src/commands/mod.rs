pub mod config;
pub mod prefix;
pub mod update;

use std::str::FromStr;
use std::time::Duration;

use alloy_primitives::Address;
use anyhow::{anyhow, Result};

use crate::cli::Cli;
use crate::config::{Config, Settings, SENDER_ENV};
use crate::rpc::RpcClient;

/// Network name from the CLI flag, falling back to the config default.
pub fn resolve_network<'a>(cli: &'a Cli, config: &'a Config) -> &'a str {
	cli.network.as_deref().unwrap_or(&config.network.default)
}

/// Resolve the RPC URL from CLI flag or config.
pub fn resolve_rpc(cli: &Cli, config: &Config) -> Result<String> {
	match &cli.rpc_url {
		Some(url) => Ok(url.clone()),
		None => Ok(config.rpc_url(resolve_network(cli, config))?.to_owned()),
	}
}

/// Merge CLI flags, process environment and config file.
pub fn resolve_settings(cli: &Cli, config: &Config) -> Settings {
	Settings::resolve(
		cli.registry.as_deref(),
		cli.from.as_deref(),
		|var| std::env::var(var).ok(),
		config,
	)
}

/// Build an RPC client for the selected network and sender.
pub fn rpc_client(cli: &Cli, config: &Config, settings: &Settings) -> Result<RpcClient> {
	let url = resolve_rpc(cli, config)?;
	let sender = settings
		.sender
		.as_deref()
		.map(|s| {
			Address::from_str(s.trim())
				.map_err(|e| anyhow!("invalid sender address {s:?} ({SENDER_ENV} / --from): {e}"))
		})
		.transpose()?;

	let timeout = Duration::from_secs(config.network.timeout_secs);
	Ok(RpcClient::new(&url, timeout)?.with_sender(sender))
}
