use std::str::FromStr;
use std::time::Duration;

use alloy_primitives::{Address, B256};
use anyhow::{anyhow, Context, Result};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tracing::debug;

use crate::registry::{self, ChainContext, RegistryWriter};

/// Minimal Ethereum JSON-RPC client.
///
/// Signing is left to the node (`eth_sendTransaction`), so this only works
/// against an endpoint that holds or proxies the sender's key: a local
/// development node, or a signing gateway in front of a public RPC.
pub struct RpcClient {
	url: String,
	http: reqwest::Client,
	sender: Option<Address>,
}

impl RpcClient {
	pub fn new(url: &str, timeout: Duration) -> Result<Self> {
		let http = reqwest::Client::builder().timeout(timeout).build()?;
		Ok(Self {
			url: url.to_owned(),
			http,
			sender: None,
		})
	}

	/// Send transactions from `sender` instead of the node's first account.
	pub fn with_sender(mut self, sender: Option<Address>) -> Self {
		self.sender = sender;
		self
	}

	pub fn url(&self) -> &str {
		&self.url
	}

	/// Issue a single JSON-RPC 2.0 request and return its `result`.
	pub async fn call(&self, method: &str, params: Value) -> Result<Value> {
		let body = json!({
			"id": 1,
			"jsonrpc": "2.0",
			"method": method,
			"params": params,
		});
		debug!(url = %self.url, method, "rpc request");

		let resp = self
			.http
			.post(&self.url)
			.json(&body)
			.send()
			.await
			.with_context(|| format!("{method} request to {} failed", self.url))?;
		let status = resp.status();
		let bytes = resp.bytes().await?;

		decode_response(method, status, &bytes)
	}

	/// `eth_chainId` as an integer.
	pub async fn get_chain_id(&self) -> Result<u64> {
		let value = self.call("eth_chainId", json!([])).await?;
		let quantity = value
			.as_str()
			.ok_or_else(|| anyhow!("eth_chainId returned a non-string value: {value}"))?;
		parse_quantity(quantity)
	}

	/// Accounts the node can sign for.
	pub async fn accounts(&self) -> Result<Vec<Address>> {
		let value = self.call("eth_accounts", json!([])).await?;
		let list = value
			.as_array()
			.ok_or_else(|| anyhow!("eth_accounts returned a non-array value: {value}"))?;

		list.iter()
			.map(|v| {
				let s = v
					.as_str()
					.ok_or_else(|| anyhow!("eth_accounts entry is not a string: {v}"))?;
				Address::from_str(s).map_err(|e| anyhow!("invalid account {s}: {e}"))
			})
			.collect()
	}

	/// Submit a transaction for the node to sign and broadcast.
	pub async fn send_transaction(&self, from: Address, to: Address, data: &[u8]) -> Result<B256> {
		let tx = json!({
			"from": from.to_string(),
			"to": to.to_string(),
			"data": format!("0x{}", hex::encode(data)),
		});
		let value = self.call("eth_sendTransaction", json!([tx])).await?;
		let hash = value
			.as_str()
			.ok_or_else(|| anyhow!("eth_sendTransaction returned a non-string value: {value}"))?;
		B256::from_str(hash).map_err(|e| anyhow!("invalid transaction hash {hash}: {e}"))
	}

	/// The configured sender, or the first account the node offers.
	async fn resolve_sender(&self) -> Result<Address> {
		if let Some(sender) = self.sender {
			return Ok(sender);
		}
		self.accounts().await?.into_iter().next().ok_or_else(|| {
			anyhow!("node at {} has no unlocked accounts; pass --from or set a sender", self.url)
		})
	}
}

#[async_trait::async_trait]
impl ChainContext for RpcClient {
	async fn chain_id(&self) -> Result<u64> {
		self.get_chain_id().await
	}
}

#[async_trait::async_trait]
impl RegistryWriter for RpcClient {
	async fn update_chain_prefix(&self, registry: Address, prefix: B256) -> Result<B256> {
		let from = self.resolve_sender().await?;
		debug!(%from, %registry, "sending updateChainPrefix");
		let data = registry::encode_update_chain_prefix(prefix);
		self.send_transaction(from, registry, &data).await
	}
}

// -- Private helpers --

/// Decode a JSON-RPC reply. Providers often attach a JSON-RPC `error` to a
/// 4xx/5xx reply, so the body wins over the HTTP status whenever it parses.
fn decode_response(method: &str, status: StatusCode, body: &[u8]) -> Result<Value> {
	match serde_json::from_slice::<Value>(body) {
		Ok(resp) if status.is_success() || resp.get("error").is_some_and(|e| !e.is_null()) => {
			take_result(method, resp)
		}
		_ if !status.is_success() => Err(anyhow!("{method} failed with HTTP {status}")),
		Ok(resp) => take_result(method, resp),
		Err(e) => Err(anyhow!("{method} returned invalid JSON: {e}")),
	}
}

/// Pull `result` out of a JSON-RPC response, turning `error` into an Err.
fn take_result(method: &str, mut resp: Value) -> Result<Value> {
	if let Some(err) = resp.get("error").filter(|e| !e.is_null()) {
		let message = err
			.get("message")
			.and_then(Value::as_str)
			.map(str::to_owned)
			.unwrap_or_else(|| err.to_string());
		return Err(anyhow!("{method} RPC error: {message}"));
	}
	match resp.get_mut("result") {
		Some(result) => Ok(result.take()),
		None => Err(anyhow!("{method} response has neither result nor error")),
	}
}

/// Parse a hex-encoded JSON-RPC quantity such as `"0xa4b1"`.
fn parse_quantity(s: &str) -> Result<u64> {
	let digits = s
		.strip_prefix("0x")
		.ok_or_else(|| anyhow!("quantity {s:?} is missing the 0x prefix"))?;
	if digits.is_empty() {
		anyhow::bail!("quantity {s:?} has no digits");
	}
	u64::from_str_radix(digits, 16).map_err(|e| anyhow!("invalid quantity {s:?}: {e}"))
}
