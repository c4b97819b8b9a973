use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Environment variable holding the deployed registry (proxy) address.
pub const REGISTRY_ADDRESS_ENV: &str = "ATTESTATION_REGISTRY_ADDRESS";

/// Environment variable overriding the sending account.
pub const SENDER_ENV: &str = "CHAIN_PREFIX_SENDER";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
	#[serde(default)]
	pub network: NetworkConfig,
	#[serde(default)]
	pub registry: RegistryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
	pub default: String,
	#[serde(default = "default_timeout_secs")]
	pub timeout_secs: u64,
	pub rpc: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryConfig {
	pub address: Option<String>,
	pub sender: Option<String>,
}

fn default_timeout_secs() -> u64 {
	30
}

impl Default for NetworkConfig {
	fn default() -> Self {
		let rpc = [
			("localhost", "http://127.0.0.1:8545"),
			("linea-goerli", "https://rpc.goerli.linea.build"),
			("linea", "https://rpc.linea.build"),
			("arbitrum-goerli", "https://goerli-rollup.arbitrum.io/rpc"),
			("arbitrum", "https://arb1.arbitrum.io/rpc"),
		]
		.into_iter()
		.map(|(name, url)| (name.to_owned(), url.to_owned()))
		.collect();

		Self {
			default: "localhost".into(),
			timeout_secs: default_timeout_secs(),
			rpc,
		}
	}
}

impl Config {
	/// Directory where CLI state is stored (~/.chain-prefix/).
	pub fn dir() -> Result<PathBuf> {
		dirs::home_dir()
			.map(|home| home.join(".chain-prefix"))
			.ok_or_else(|| anyhow!("could not determine home directory"))
	}

	/// Path to the config file.
	pub fn path() -> Result<PathBuf> {
		Ok(Self::dir()?.join("config.toml"))
	}

	/// Load config from disk, falling back to defaults if no file exists.
	pub fn load() -> Result<Self> {
		let path = Self::path()?;
		if path.exists() {
			let content = std::fs::read_to_string(&path)?;
			Ok(toml::from_str(&content)?)
		} else {
			Ok(Self::default())
		}
	}

	/// Persist the current config to disk, creating the directory if needed.
	pub fn save(&self) -> Result<()> {
		let path = Self::path()?;
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(&path, toml::to_string_pretty(self)?)?;
		Ok(())
	}

	/// Return the RPC URL for the given network name.
	pub fn rpc_url(&self, network: &str) -> Result<&str> {
		self.network
			.rpc
			.get(network)
			.map(String::as_str)
			.ok_or_else(|| {
				anyhow!("no RPC URL configured for network {network:?}. Run: chain-prefix config set-rpc {network} <url>")
			})
	}
}

/// Everything one run needs, after CLI flags, environment and the config
/// file have been merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
	pub registry_address: Option<String>,
	pub sender: Option<String>,
}

impl Settings {
	/// Merge the layers: explicit flag, then environment, then config file.
	/// An empty value in one layer falls through to the next.
	pub fn resolve<F>(
		registry_flag: Option<&str>,
		sender_flag: Option<&str>,
		env: F,
		config: &Config,
	) -> Self
	where
		F: Fn(&str) -> Option<String>,
	{
		let set = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
		let pick = |flag: Option<&str>, var: &str, file: Option<&String>| {
			set(flag.map(str::to_owned))
				.or_else(|| set(env(var)))
				.or_else(|| set(file.cloned()))
		};

		Self {
			registry_address: pick(
				registry_flag,
				REGISTRY_ADDRESS_ENV,
				config.registry.address.as_ref(),
			),
			sender: pick(sender_flag, SENDER_ENV, config.registry.sender.as_ref()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const REGISTRY: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

	fn no_env(_: &str) -> Option<String> {
		None
	}

	#[test]
	fn defaults_are_sensible() {
		let c = Config::default();
		assert_eq!(c.network.default, "localhost");
		assert_eq!(c.network.timeout_secs, 30);
		assert_eq!(c.rpc_url("localhost").unwrap(), "http://127.0.0.1:8545");
		assert_eq!(c.rpc_url("linea").unwrap(), "https://rpc.linea.build");
		assert!(c.registry.address.is_none());
		assert!(c.registry.sender.is_none());
	}

	#[test]
	fn toml_roundtrip() {
		let mut c = Config::default();
		c.registry.address = Some(REGISTRY.into());
		c.network.rpc.insert("devnet".into(), "http://10.0.0.2:8545".into());

		let serialized = toml::to_string_pretty(&c).unwrap();
		let parsed: Config = toml::from_str(&serialized).unwrap();

		assert_eq!(parsed.registry.address.as_deref(), Some(REGISTRY));
		assert_eq!(parsed.rpc_url("devnet").unwrap(), "http://10.0.0.2:8545");
	}

	#[test]
	fn minimal_file_fills_in_defaults() {
		let parsed: Config = toml::from_str(
			r#"
			[network]
			default = "linea"

			[network.rpc]
			linea = "https://rpc.linea.build"
			"#,
		)
		.unwrap();

		assert_eq!(parsed.network.timeout_secs, 30);
		assert!(parsed.registry.address.is_none());
	}

	#[test]
	fn unknown_network_has_no_rpc() {
		let c = Config::default();
		let err = c.rpc_url("mainnet").unwrap_err();
		assert!(err.to_string().contains("mainnet"));
	}

	#[test]
	fn flag_beats_env_beats_file() {
		let mut c = Config::default();
		c.registry.address = Some("0xfile".into());
		let env = |var: &str| (var == REGISTRY_ADDRESS_ENV).then(|| "0xenv".to_owned());

		let s = Settings::resolve(Some("0xflag"), None, env, &c);
		assert_eq!(s.registry_address.as_deref(), Some("0xflag"));

		let s = Settings::resolve(None, None, env, &c);
		assert_eq!(s.registry_address.as_deref(), Some("0xenv"));

		let s = Settings::resolve(None, None, no_env, &c);
		assert_eq!(s.registry_address.as_deref(), Some("0xfile"));
	}

	#[test]
	fn empty_value_counts_as_missing() {
		let env = |var: &str| (var == REGISTRY_ADDRESS_ENV).then(String::new);
		let s = Settings::resolve(None, None, env, &Config::default());
		assert!(s.registry_address.is_none());
		assert!(s.sender.is_none());

		let s = Settings::resolve(Some("  "), Some(""), no_env, &Config::default());
		assert!(s.registry_address.is_none());
		assert!(s.sender.is_none());
	}

	#[test]
	fn empty_env_falls_through_to_file() {
		let mut c = Config::default();
		c.registry.address = Some("0xfile".into());
		let env = |var: &str| (var == REGISTRY_ADDRESS_ENV).then(String::new);

		let s = Settings::resolve(None, None, env, &c);
		assert_eq!(s.registry_address.as_deref(), Some("0xfile"));
	}

	#[test]
	fn empty_flag_falls_through_to_env() {
		let env = |var: &str| (var == REGISTRY_ADDRESS_ENV).then(|| "0xenv".to_owned());

		let s = Settings::resolve(Some(""), None, env, &Config::default());
		assert_eq!(s.registry_address.as_deref(), Some("0xenv"));
	}

	#[test]
	fn registry_only_file_keeps_default_networks() {
		let parsed: Config = toml::from_str(&format!(
			"[registry]\naddress = \"{REGISTRY}\"\n"
		))
		.unwrap();

		assert_eq!(parsed.registry.address.as_deref(), Some(REGISTRY));
		assert_eq!(parsed.network.default, "localhost");
		assert_eq!(parsed.rpc_url("arbitrum").unwrap(), "https://arb1.arbitrum.io/rpc");
	}
}
