use alloy_primitives::{b256, B256};

use crate::error::UnknownNetwork;

/// Linea Goerli testnet.
pub const LINEA_GOERLI: u64 = 59140;
/// Linea mainnet.
pub const LINEA: u64 = 59144;
/// Arbitrum Goerli testnet.
pub const ARBITRUM_GOERLI: u64 = 421613;
/// Arbitrum One.
pub const ARBITRUM: u64 = 42161;

/// A group of networks that share one chain prefix in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainFamily {
	Linea,
	Arbitrum,
}

impl ChainFamily {
	/// The family a chain ID belongs to, if it is one we know.
	pub fn of(chain_id: u64) -> Option<Self> {
		match chain_id {
			LINEA_GOERLI | LINEA => Some(Self::Linea),
			ARBITRUM_GOERLI | ARBITRUM => Some(Self::Arbitrum),
			_ => None,
		}
	}

	/// The 32-byte prefix written to the registry for every chain in this
	/// family.
	pub fn prefix(self) -> B256 {
		match self {
			Self::Linea => B256::ZERO,
			Self::Arbitrum => {
				b256!("0001000000000000000000000000000000000000000000000000000000000000")
			}
		}
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Linea => "linea",
			Self::Arbitrum => "arbitrum",
		}
	}
}

/// One row of the prefix table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KnownChain {
	pub chain_id: u64,
	pub name: &'static str,
	pub family: ChainFamily,
}

impl KnownChain {
	pub fn prefix(&self) -> B256 {
		self.family.prefix()
	}
}

static KNOWN_CHAINS: [KnownChain; 4] = [
	KnownChain {
		chain_id: LINEA_GOERLI,
		name: "Linea Goerli",
		family: ChainFamily::Linea,
	},
	KnownChain {
		chain_id: LINEA,
		name: "Linea",
		family: ChainFamily::Linea,
	},
	KnownChain {
		chain_id: ARBITRUM_GOERLI,
		name: "Arbitrum Goerli",
		family: ChainFamily::Arbitrum,
	},
	KnownChain {
		chain_id: ARBITRUM,
		name: "Arbitrum One",
		family: ChainFamily::Arbitrum,
	},
];

/// Every chain ID the resolver accepts, in table order.
pub fn known_chains() -> &'static [KnownChain] {
	&KNOWN_CHAINS
}

/// Map a chain ID to the prefix the registry expects on that network.
///
/// Exact match only. Anything outside the table is an `UnknownNetwork`
/// and must not lead to a transaction.
pub fn resolve_prefix(chain_id: u64) -> Result<B256, UnknownNetwork> {
	ChainFamily::of(chain_id)
		.map(ChainFamily::prefix)
		.ok_or(UnknownNetwork { chain_id })
}
