use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
	name = "chain-prefix",
	about = "Push the per-network chain prefix to a deployed AttestationRegistry.",
	version
)]
pub struct Cli {
	/// Named network from the config file (localhost, linea, arbitrum, ...).
	#[arg(long, global = true)]
	pub network: Option<String>,

	/// Override RPC endpoint URL.
	#[arg(long, global = true)]
	pub rpc_url: Option<String>,

	/// Override the AttestationRegistry address.
	#[arg(long, global = true)]
	pub registry: Option<String>,

	/// Account to send from. Defaults to the node's first account.
	#[arg(long, global = true)]
	pub from: Option<String>,

	/// Print debug logs to stderr.
	#[arg(short, long, global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
	/// Write the prefix of the connected chain to the registry.
	Update,

	/// Print the prefix for a chain ID without touching the network.
	Show {
		/// Numeric chain ID, e.g. 59144.
		chain_id: u64,
	},

	/// List every chain ID with a known prefix.
	List,

	/// Inspect and edit the config file.
	Config {
		#[command(subcommand)]
		command: ConfigCommand,
	},
}

// -- Config subcommands --

#[derive(Subcommand)]
pub enum ConfigCommand {
	/// Show the merged configuration.
	Show,

	/// Store the registry address in the config file.
	SetRegistry {
		/// Registry (proxy) address, 0x-prefixed.
		address: String,
	},

	/// Add or replace the RPC URL for a named network.
	SetRpc {
		/// Network name used with --network.
		name: String,

		/// JSON-RPC endpoint URL.
		url: String,
	},
}
