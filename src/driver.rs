use std::str::FromStr;

use alloy_primitives::{Address, B256};
use tracing::{debug, info};

use crate::config::{Settings, REGISTRY_ADDRESS_ENV};
use crate::error::UpdateError;
use crate::prefix::resolve_prefix;
use crate::registry::{ChainContext, RegistryWriter};

/// What a successful run wrote, and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixUpdate {
	pub chain_id: u64,
	pub prefix: B256,
	pub registry: Address,
	pub tx_hash: B256,
}

impl PrefixUpdate {
	/// One-line summary of the prefix that was written.
	pub fn prefix_line(&self) -> String {
		format!("Chain prefix for chain ID {} is {}", self.chain_id, self.prefix)
	}
}

/// Push the chain prefix of the connected network to the registry.
///
/// Configuration is checked before the network is touched, and the
/// write is only submitted once the chain ID has resolved to a prefix.
/// Nothing is retried.
pub async fn update_chain_prefix<N, W>(
	settings: &Settings,
	network: &N,
	sink: &W,
) -> Result<PrefixUpdate, UpdateError>
where
	N: ChainContext + ?Sized,
	W: RegistryWriter + ?Sized,
{
	let registry = registry_address(settings)?;
	debug!(%registry, "registry address resolved");

	let chain_id = network.chain_id().await.map_err(UpdateError::ChainId)?;
	let prefix = resolve_prefix(chain_id)?;
	info!(chain_id, %prefix, "chain prefix resolved");

	let tx_hash = sink
		.update_chain_prefix(registry, prefix)
		.await
		.map_err(UpdateError::WriteRejected)?;
	info!(chain_id, %prefix, %tx_hash, "updateChainPrefix submitted");

	Ok(PrefixUpdate {
		chain_id,
		prefix,
		registry,
		tx_hash,
	})
}

/// The registry address from `settings`, or the configuration error that
/// stops the run.
pub fn registry_address(settings: &Settings) -> Result<Address, UpdateError> {
	let raw = settings
		.registry_address
		.as_deref()
		.ok_or(UpdateError::MissingConfiguration(REGISTRY_ADDRESS_ENV))?;

	Address::from_str(raw.trim()).map_err(|e| UpdateError::InvalidConfiguration {
		name: REGISTRY_ADDRESS_ENV,
		value: raw.to_owned(),
		reason: e.to_string(),
	})
}
