//! Account management for the points deployer.
//!
//! This crate resolves a profile's credential reference into a usable
//! signing key and wraps it in a local wallet. Resolution and key parsing
//! are purely local operations; they run before anything touches the
//! network, so a missing or malformed credential fails the run without a
//! single RPC call.

use alloy_primitives::Address;
use alloy_signer_local::PrivateKeySigner;
use deployer_types::{without_0x_prefix, SecretString};
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during account operations.
#[derive(Debug, Error)]
pub enum AccountError {
	/// The credential reference points at an environment variable that is
	/// not set.
	#[error("environment variable '{0}' is not set")]
	MissingCredential(String),
	/// The credential reference looks like env syntax but does not parse.
	#[error("malformed credential reference: {0}")]
	InvalidReference(String),
	/// The resolved value is not a usable private key.
	#[error("invalid private key: {0}")]
	InvalidKey(String),
}

/// Resolves a credential reference into key material.
///
/// `${VAR}` and `${VAR:-default}` are looked up in the process environment;
/// anything else is treated as a literal key. Same grammar as the
/// configuration layer's variable expansion, but deferred to signing time
/// so the error class is a credential problem, not a config problem.
pub fn resolve_credential(reference: &str) -> Result<SecretString, AccountError> {
	let pattern = Regex::new(r"^\$\{([A-Z_][A-Z0-9_]{0,127})(?::-([^}]{0,256}))?\}$")
		.map_err(|e| AccountError::InvalidReference(e.to_string()))?;

	if let Some(caps) = pattern.captures(reference) {
		let var_name = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
		return match std::env::var(var_name) {
			Ok(value) => Ok(SecretString::from(value)),
			Err(_) => match caps.get(2) {
				Some(default) => Ok(SecretString::from(default.as_str())),
				None => Err(AccountError::MissingCredential(var_name.to_string())),
			},
		};
	}

	if reference.starts_with("${") {
		return Err(AccountError::InvalidReference(reference.to_string()));
	}

	Ok(SecretString::from(reference))
}

/// Local wallet over a hex-encoded private key.
#[derive(Debug)]
pub struct LocalWallet {
	signer: PrivateKeySigner,
}

impl LocalWallet {
	/// Creates a wallet from resolved key material.
	///
	/// The key must be 64 hex characters, with or without a 0x prefix.
	pub fn new(key: &SecretString) -> Result<Self, AccountError> {
		let signer = key.with_exposed(|raw| {
			let bare = without_0x_prefix(raw);
			if bare.len() != 64 {
				return Err(AccountError::InvalidKey(
					"must be 64 hex characters (32 bytes)".to_string(),
				));
			}
			if hex::decode(bare).is_err() {
				return Err(AccountError::InvalidKey(
					"must be valid hexadecimal".to_string(),
				));
			}
			bare.parse::<PrivateKeySigner>()
				.map_err(|e| AccountError::InvalidKey(e.to_string()))
		})?;

		Ok(Self { signer })
	}

	/// Resolves a credential reference and builds the wallet in one step.
	pub fn from_credential(reference: &str) -> Result<Self, AccountError> {
		Self::new(&resolve_credential(reference)?)
	}

	/// Address derived from the signing key.
	pub fn address(&self) -> Address {
		self.signer.address()
	}

	/// Consumes the wallet, yielding the signer for the delivery layer.
	pub fn into_signer(self) -> PrivateKeySigner {
		self.signer
	}
}
