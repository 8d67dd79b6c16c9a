//! Transaction delivery for the points deployer.
//!
//! This crate handles the submission of deployment transactions to an EVM
//! network over HTTP JSON-RPC using the Alloy library: provider and wallet
//! construction, a single-shot CREATE submission, the confirmation wait,
//! and receipt classification.
//!
//! Submission is one attempt, fail-fast: there is no retry layer, and the
//! confirmation wait carries no internal deadline. A run either completes
//! the wait or is killed externally.

use alloy_network::{EthereumWallet, TransactionBuilder};
use alloy_primitives::{B256, U256};
use alloy_provider::{DynProvider, Provider, ProviderBuilder};
use alloy_rpc_types::TransactionRequest;
use alloy_signer::Signer;
use alloy_signer_local::PrivateKeySigner;
use deployer_types::{ContractArtifact, Deployment};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during transaction delivery operations.
#[derive(Debug, Error)]
pub enum DeliveryError {
	/// Error that occurs during network communication.
	#[error("network error: {0}")]
	Network(String),
	/// The transaction was included but its execution reverted.
	#[error("transaction {tx_hash} reverted in block {block_number}")]
	Reverted { tx_hash: B256, block_number: u64 },
	/// The transaction succeeded but the receipt names no contract, which
	/// means it was not a deployment.
	#[error("no contract address in receipt for transaction {0}")]
	MissingContractAddress(B256),
}

/// Wallet-backed connection to a single RPC endpoint.
///
/// The provider fills nonce, gas limit, and chain ID; the gas price comes
/// from the active network profile and is set explicitly per submission.
pub struct Submitter {
	provider: DynProvider,
	chain_id: u64,
}

impl Submitter {
	/// Connects to `url` and prepares a provider that signs with `signer`.
	///
	/// The initial chain ID query doubles as a reachability check, so an
	/// unreachable endpoint fails here, before any transaction exists.
	pub async fn connect(url: &str, signer: PrivateKeySigner) -> Result<Self, DeliveryError> {
		let endpoint = url
			.parse()
			.map_err(|e| DeliveryError::Network(format!("invalid RPC URL '{url}': {e}")))?;

		let probe = ProviderBuilder::new().connect_http(endpoint.clone());
		let chain_id = probe
			.get_chain_id()
			.await
			.map_err(|e| DeliveryError::Network(format!("failed to reach {url}: {e}")))?;

		let wallet = EthereumWallet::from(signer.with_chain_id(Some(chain_id)));
		let provider = ProviderBuilder::new()
			.wallet(wallet)
			.connect_http(endpoint)
			.erased();

		debug!(chain_id, url, "connected to RPC endpoint");
		Ok(Self { provider, chain_id })
	}

	/// Chain ID reported by the connected endpoint.
	pub fn chain_id(&self) -> u64 {
		self.chain_id
	}

	/// Submits a contract-creation transaction and waits for inclusion.
	///
	/// Blocks until the network reports one confirmation. The wait is
	/// bounded only by the endpoint; callers needing a deadline must
	/// enforce one externally.
	pub async fn submit_deployment(
		&self,
		artifact: &ContractArtifact,
		gas_price_wei: u128,
	) -> Result<Deployment, DeliveryError> {
		let request = TransactionRequest::default()
			.with_deploy_code(artifact.bytecode.clone())
			.with_value(U256::ZERO)
			.with_gas_price(gas_price_wei);

		debug!(
			contract = %artifact.name,
			data_len = artifact.bytecode.len(),
			gas_price_wei,
			"sending deployment transaction"
		);

		let pending = self
			.provider
			.send_transaction(request)
			.await
			.map_err(|e| DeliveryError::Network(format!("failed to send transaction: {e}")))?;

		let tx_hash = *pending.tx_hash();
		info!(%tx_hash, "deployment transaction submitted, waiting for confirmation");

		let receipt = pending
			.with_required_confirmations(1)
			.with_timeout(None)
			.get_receipt()
			.await
			.map_err(|e| DeliveryError::Network(format!("failed to confirm transaction: {e}")))?;

		let block_number = receipt.block_number.unwrap_or(0);
		if !receipt.status() {
			return Err(DeliveryError::Reverted {
				tx_hash: receipt.transaction_hash,
				block_number,
			});
		}

		let contract_address = receipt
			.contract_address
			.ok_or(DeliveryError::MissingContractAddress(
				receipt.transaction_hash,
			))?;

		info!(%contract_address, block_number, "deployment confirmed");
		Ok(Deployment {
			contract_address,
			transaction_hash: receipt.transaction_hash,
			block_number,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloy_primitives::Address;

	fn test_signer() -> PrivateKeySigner {
		"0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80"
			.parse()
			.unwrap()
	}

	#[tokio::test]
	async fn connect_rejects_invalid_url() {
		let result = Submitter::connect("not a url", test_signer()).await;
		match result {
			Err(DeliveryError::Network(msg)) => assert!(msg.contains("invalid RPC URL")),
			other => panic!("expected network error, got {other:?}"),
		}
	}

	#[tokio::test]
	async fn connect_fails_when_endpoint_unreachable() {
		// Port 1 is never a JSON-RPC endpoint; the preflight must fail
		// before any transaction is constructed.
		let result = Submitter::connect("http://127.0.0.1:1", test_signer()).await;
		assert!(matches!(result, Err(DeliveryError::Network(_))));
	}

	#[test]
	fn repeat_deployments_land_at_distinct_addresses() {
		// Deploying twice is not idempotent: each submission consumes the
		// next nonce, and the CREATE address is a function of sender and
		// nonce. Two runs with identical inputs yield two instances.
		let sender: Address = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
			.parse()
			.unwrap();
		let first = sender.create(0);
		let second = sender.create(1);
		assert_ne!(first, second);
		assert_ne!(second, sender.create(2));
	}

	#[test]
	fn reverted_error_names_transaction_and_block() {
		let err = DeliveryError::Reverted {
			tx_hash: B256::ZERO,
			block_number: 7,
		};
		let msg = err.to_string();
		assert!(msg.contains("reverted"));
		assert!(msg.contains("block 7"));
	}
}
