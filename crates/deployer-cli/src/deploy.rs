//! The deployment routine.
//!
//! Linear flow: resolve the signing credential, connect to the profile's
//! endpoint, submit the creation transaction, wait for confirmation. Any
//! failure aborts the remaining steps immediately; the only external
//! mutation is the chain's own state, which lands atomically or not at
//! all.

use crate::error::DeployError;
use deployer_account::LocalWallet;
use deployer_config::NetworkProfile;
use deployer_delivery::Submitter;
use deployer_types::{ContractArtifact, Deployment};
use tracing::info;

/// Deploys one compiled contract through the given network profile.
///
/// The artifact is an explicit input; name resolution happens in the
/// caller via [`crate::ArtifactStore`]. Credential resolution runs before
/// anything touches the network, so a bad or missing signing key never
/// results in an RPC call.
pub async fn deploy(
	artifact: &ContractArtifact,
	profile: &NetworkProfile,
) -> Result<Deployment, DeployError> {
	let wallet = LocalWallet::from_credential(&profile.private_key)?;
	info!(
		contract = %artifact.name,
		sender = %wallet.address(),
		url = %profile.url,
		"deploying contract"
	);

	let submitter = Submitter::connect(&profile.url, wallet.into_signer()).await?;
	info!(chain_id = submitter.chain_id(), "connected to network");

	let deployment = submitter
		.submit_deployment(artifact, profile.gas_price_wei)
		.await?;

	Ok(deployment)
}
