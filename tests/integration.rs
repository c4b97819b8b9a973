//! Integration tests against a local development node (anvil or hardhat)
//! listening on 127.0.0.1:8545.
//!
//! These are marked `#[ignore]` by default because they require a running
//! node. Run them explicitly with:
//!
//!   cargo test --test integration -- --ignored

use std::time::Duration;

use alloy_primitives::{Address, B256};
use chain_prefix_cli::config::Settings;
use chain_prefix_cli::driver;
use chain_prefix_cli::error::UpdateError;
use chain_prefix_cli::prefix::known_chains;
use chain_prefix_cli::rpc::RpcClient;

const LOCAL_RPC: &str = "http://127.0.0.1:8545";

fn client() -> RpcClient {
	RpcClient::new(LOCAL_RPC, Duration::from_secs(5)).expect("failed to build client")
}

#[test]
fn every_known_chain_resolves() {
	for chain in known_chains() {
		let prefix = chain_prefix_cli::prefix::resolve_prefix(chain.chain_id)
			.expect("table entry should resolve");
		assert_eq!(prefix, chain.prefix(), "{}", chain.name);
	}
}

#[tokio::test]
async fn missing_registry_needs_no_node() {
	// Nothing listens on port 9; the driver must fail before dialing it.
	let rpc = RpcClient::new("http://127.0.0.1:9", Duration::from_secs(1)).unwrap();

	let err = driver::update_chain_prefix(&Settings::default(), &rpc, &rpc)
		.await
		.unwrap_err();

	assert!(matches!(err, UpdateError::MissingConfiguration(_)));
}

#[tokio::test]
#[ignore]
async fn local_node_reports_chain_id() {
	let chain_id = client().get_chain_id().await.expect("eth_chainId failed");
	assert!(chain_id > 0, "chain id should be positive, got {chain_id}");
}

#[tokio::test]
#[ignore]
async fn local_node_has_unlocked_accounts() {
	let accounts = client().accounts().await.expect("eth_accounts failed");
	assert!(!accounts.is_empty(), "dev node should expose accounts");
}

#[tokio::test]
#[ignore]
async fn dev_chain_is_not_a_known_network() {
	// Default dev chain IDs (31337, 1337) have no prefix, so no transaction
	// may be sent even though the node would accept one.
	let rpc = client();
	let settings = Settings {
		registry_address: Some(Address::repeat_byte(0x11).to_string()),
		sender: None,
	};

	let err = driver::update_chain_prefix(&settings, &rpc, &rpc)
		.await
		.unwrap_err();

	match err {
		UpdateError::UnknownNetwork(e) => assert!(e.chain_id == 31337 || e.chain_id == 1337),
		other => panic!("expected UnknownNetwork, got {other:?}"),
	}
}

#[tokio::test]
#[ignore]
async fn plain_transfer_is_accepted() {
	let rpc = client();
	let accounts = rpc.accounts().await.expect("eth_accounts failed");
	let from = accounts[0];

	let hash = rpc
		.send_transaction(from, Address::repeat_byte(0x22), &[])
		.await
		.expect("eth_sendTransaction failed");

	assert_ne!(hash, B256::ZERO);
}
