use alloy_primitives::{keccak256, Address, B256};
use anyhow::Result;

/// Solidity signature of the registry's prefix setter.
pub const UPDATE_CHAIN_PREFIX_SIG: &str = "updateChainPrefix(bytes32)";

/// The one write this tool performs against the AttestationRegistry.
///
/// Kept narrow so the update sequence can run against a test double
/// instead of a live node.
#[async_trait::async_trait]
pub trait RegistryWriter: Send + Sync {
	/// Submit `updateChainPrefix(prefix)` to the registry at `registry` and
	/// return the transaction hash.
	async fn update_chain_prefix(&self, registry: Address, prefix: B256) -> Result<B256>;
}

/// Source of the chain ID of the network we are connected to.
#[async_trait::async_trait]
pub trait ChainContext: Send + Sync {
	async fn chain_id(&self) -> Result<u64>;
}

/// First four bytes of `keccak256(signature)`.
pub fn selector(signature: &str) -> [u8; 4] {
	let hash = keccak256(signature.as_bytes());
	[hash[0], hash[1], hash[2], hash[3]]
}

/// ABI-encode a call to `updateChainPrefix(bytes32)`: selector followed by
/// the prefix as a single static word.
pub fn encode_update_chain_prefix(prefix: B256) -> Vec<u8> {
	let mut data = Vec::with_capacity(4 + 32);
	data.extend_from_slice(&selector(UPDATE_CHAIN_PREFIX_SIG));
	data.extend_from_slice(prefix.as_slice());
	data
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::b256;

	#[test]
	fn calldata_is_selector_then_word() {
		let prefix = b256!("0001000000000000000000000000000000000000000000000000000000000000");
		let data = encode_update_chain_prefix(prefix);

		assert_eq!(data.len(), 36);
		assert_eq!(&data[..4], &keccak256(UPDATE_CHAIN_PREFIX_SIG)[..4]);
		assert_eq!(&data[4..], prefix.as_slice());
	}

	#[test]
	fn selector_depends_on_signature() {
		assert_ne!(
			selector(UPDATE_CHAIN_PREFIX_SIG),
			selector("updateChainPrefix(uint256)")
		);
	}
}
