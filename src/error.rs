//! Error types for prefix resolution and the registry update.

use thiserror::Error;

/// The chain ID has no entry in the prefix table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown network: chain ID {chain_id} has no registered chain prefix")]
pub struct UnknownNetwork {
	pub chain_id: u64,
}

/// Errors that stop a registry update.
#[derive(Debug, Error)]
pub enum UpdateError {
	/// A required setting was not supplied by any configuration layer.
	#[error("missing configuration: {0} is not set")]
	MissingConfiguration(&'static str),

	/// A setting was supplied but could not be parsed.
	#[error("invalid configuration: {name} = {value:?}: {reason}")]
	InvalidConfiguration {
		name: &'static str,
		value: String,
		reason: String,
	},

	/// The active chain has no prefix.
	#[error(transparent)]
	UnknownNetwork(#[from] UnknownNetwork),

	/// The network context could not report a chain ID.
	#[error("failed to query the active chain ID")]
	ChainId(#[source] anyhow::Error),

	/// The registry write was not accepted.
	#[error("updateChainPrefix transaction was rejected")]
	WriteRejected(#[source] anyhow::Error),
}
