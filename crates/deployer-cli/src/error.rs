//! Aggregate error type for a deployment run.
//!
//! Every failure class a run can hit converges here. Display strings lead
//! with the classified kind so operators and scripts can match on the
//! class in stderr output.

use crate::artifacts::StoreError;
use deployer_account::AccountError;
use deployer_config::ConfigError;
use deployer_delivery::DeliveryError;
use thiserror::Error;

/// Terminal errors for a deployment invocation. None are retried.
#[derive(Debug, Error)]
pub enum DeployError {
	/// The configuration file is missing, malformed, or invalid.
	#[error("ConfigError: {0}")]
	Config(#[from] ConfigError),
	/// The signing credential is missing or unusable. Raised before any
	/// network call.
	#[error("CredentialError: {0}")]
	Credential(#[from] AccountError),
	/// The named contract is not present in the compiled set.
	#[error("ArtifactNotFoundError: {0}")]
	Artifact(#[from] StoreError),
	/// The endpoint was unreachable or the submission failed in transit.
	#[error("NetworkError: {0}")]
	Network(DeliveryError),
	/// The transaction landed but execution reverted.
	#[error("RevertError: {0}")]
	Revert(DeliveryError),
}

impl From<DeliveryError> for DeployError {
	fn from(err: DeliveryError) -> Self {
		match err {
			DeliveryError::Reverted { .. } => DeployError::Revert(err),
			_ => DeployError::Network(err),
		}
	}
}
