//! Deployment outcome types.

use alloy_primitives::{Address, B256};

/// Outcome of a successful contract deployment.
///
/// Produced by the delivery layer once the deployment transaction has been
/// confirmed, consumed immediately by the reporting step. Failures travel
/// as errors, so a value of this type always carries a real on-chain
/// address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
	/// Address the contract was instantiated at.
	pub contract_address: Address,
	/// Hash of the deployment transaction.
	pub transaction_hash: B256,
	/// Block the transaction was included in.
	pub block_number: u64,
}
