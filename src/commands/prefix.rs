use anyhow::Result;

use crate::error::UnknownNetwork;
use crate::prefix::{known_chains, ChainFamily};

/// Print the prefix for one chain ID.
pub fn show(chain_id: u64) -> Result<()> {
	let family = family_of(chain_id)?;
	println!("Chain ID: {chain_id}");
	println!("Family:   {}", family.as_str());
	println!("Prefix:   {}", family.prefix());
	Ok(())
}

fn family_of(chain_id: u64) -> Result<ChainFamily, UnknownNetwork> {
	ChainFamily::of(chain_id).ok_or(UnknownNetwork { chain_id })
}

/// Print the whole prefix table.
pub fn list() -> Result<()> {
	for chain in known_chains() {
		println!(
			"{:>8}  {:<16} {:<9} {}",
			chain.chain_id,
			chain.name,
			chain.family.as_str(),
			chain.prefix()
		);
	}
	println!("\n{} chain(s) total.", known_chains().len());
	Ok(())
}
