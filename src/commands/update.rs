use anyhow::Result;
use tracing::debug;

use crate::cli::Cli;
use crate::commands::{resolve_network, resolve_settings, rpc_client};
use crate::config::Config;
use crate::driver;

pub async fn run(cli: &Cli) -> Result<()> {
	println!("Updating AttestationRegistry with the chain prefix...");

	let config = Config::load()?;
	let settings = resolve_settings(cli, &config);

	// Only orders the errors: a missing or malformed registry address must
	// be reported ahead of a bad --from or RPC URL. The driver parses it again.
	driver::registry_address(&settings)?;

	let rpc = rpc_client(cli, &config, &settings)?;
	debug!(network = resolve_network(cli, &config), url = rpc.url(), "connected");

	let update = driver::update_chain_prefix(&settings, &rpc, &rpc).await?;

	println!("{}", update.prefix_line());
	println!("  Registry: {}", update.registry);
	println!("  TX:       {}", update.tx_hash);
	println!("AttestationRegistry updated!");
	Ok(())
}
