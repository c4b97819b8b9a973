use std::str::FromStr;

use alloy_primitives::Address;
use anyhow::{anyhow, Result};

use crate::cli::{Cli, ConfigCommand};
use crate::commands::{resolve_network, resolve_rpc, resolve_settings};
use crate::config::Config;

pub fn run(cli: &Cli, cmd: &ConfigCommand) -> Result<()> {
	match cmd {
		ConfigCommand::Show => show(cli),
		ConfigCommand::SetRegistry { address } => set_registry(address),
		ConfigCommand::SetRpc { name, url } => set_rpc(name, url),
	}
}

fn show(cli: &Cli) -> Result<()> {
	let config = Config::load()?;
	let settings = resolve_settings(cli, &config);
	let rpc = resolve_rpc(cli, &config).unwrap_or_else(|e| format!("<{e}>"));

	println!("Config:   {}", Config::path()?.display());
	println!("Network:  {}", resolve_network(cli, &config));
	println!("RPC:      {rpc}");
	println!(
		"Registry: {}",
		settings.registry_address.as_deref().unwrap_or("not set")
	);
	println!(
		"Sender:   {}",
		settings.sender.as_deref().unwrap_or("node default")
	);
	println!("Networks:");
	for (name, url) in &config.network.rpc {
		println!("  {name:<16} {url}");
	}
	Ok(())
}

fn set_registry(address: &str) -> Result<()> {
	let parsed = Address::from_str(address.trim())
		.map_err(|e| anyhow!("invalid registry address {address:?}: {e}"))?;

	let mut config = Config::load()?;
	config.registry.address = Some(parsed.to_string());
	config.save()?;
	println!("Registry address set to: {parsed}");
	Ok(())
}

fn set_rpc(name: &str, url: &str) -> Result<()> {
	if !(url.starts_with("http://") || url.starts_with("https://")) {
		anyhow::bail!("RPC URL must start with http:// or https://, got {url:?}");
	}

	let mut config = Config::load()?;
	config.network.rpc.insert(name.to_owned(), url.to_owned());
	config.save()?;
	println!("RPC for {name} set to: {url}");
	Ok(())
}
