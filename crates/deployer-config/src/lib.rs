//! Configuration for the points deployer.
//!
//! This crate loads the TOML configuration file that names the artifact
//! directory and the available network profiles, and selects the active
//! profile for a run. Every profile field is required and validated up
//! front; unknown keys are rejected rather than silently ignored, so a
//! stray token in the file is a hard error instead of a guessed default.
//!
//! The configuration is constructed once at process start, passed by
//! reference into the deployment path, and never mutated.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error that occurs during file I/O operations.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
	/// Error that occurs when parsing TOML configuration.
	#[error("Configuration error: {0}")]
	Parse(String),
	/// Error that occurs when configuration validation fails.
	#[error("Validation error: {0}")]
	Validation(String),
}

impl From<toml::de::Error> for ConfigError {
	fn from(err: toml::de::Error) -> Self {
		// Extract just the message without the huge input dump
		ConfigError::Parse(err.message().to_string())
	}
}

/// Top-level deployer configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
	/// Directory holding compiled contract artifacts.
	pub artifacts_dir: PathBuf,
	/// Profile used when no explicit override is given.
	pub default_network: String,
	/// Named network profiles.
	pub networks: HashMap<String, NetworkProfile>,
}

/// A named bundle of endpoint, credential, and fee parameters.
///
/// `private_key` holds a credential reference — `${VAR}` env syntax or a
/// literal hex key. It is resolved by the account layer at signing time,
/// never at configuration load, so a missing environment variable only
/// surfaces when the profile is actually used.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NetworkProfile {
	/// HTTP JSON-RPC endpoint.
	pub url: String,
	/// Credential reference for the signing key.
	pub private_key: String,
	/// Gas price in wei applied to the deployment transaction.
	pub gas_price_wei: u128,
}

impl Config {
	/// Loads and validates configuration from a TOML file.
	pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
		let content = std::fs::read_to_string(path)?;
		let config: Config = toml::from_str(&content)?;
		config.validate()?;
		Ok(config)
	}

	/// Ensures all required fields are set to usable values.
	fn validate(&self) -> Result<(), ConfigError> {
		if self.artifacts_dir.as_os_str().is_empty() {
			return Err(ConfigError::Validation(
				"artifacts_dir cannot be empty".into(),
			));
		}

		if self.networks.is_empty() {
			return Err(ConfigError::Validation(
				"at least one network profile must be configured".into(),
			));
		}

		if !self.networks.contains_key(&self.default_network) {
			return Err(ConfigError::Validation(format!(
				"default_network '{}' is not a configured profile",
				self.default_network
			)));
		}

		for (name, profile) in &self.networks {
			if profile.url.is_empty() {
				return Err(ConfigError::Validation(format!(
					"network '{name}' must set url"
				)));
			}
			if !profile.url.starts_with("http://") && !profile.url.starts_with("https://") {
				return Err(ConfigError::Validation(format!(
					"network '{name}' has a non-HTTP RPC URL: {}",
					profile.url
				)));
			}
			if profile.private_key.is_empty() {
				return Err(ConfigError::Validation(format!(
					"network '{name}' must set private_key"
				)));
			}
		}

		Ok(())
	}

	/// Selects the active network profile.
	///
	/// An explicit override wins; otherwise `default_network` applies.
	/// Exactly one profile is active per run.
	pub fn select_network(
		&self,
		selected: Option<&str>,
	) -> Result<(&str, &NetworkProfile), ConfigError> {
		let name = selected.unwrap_or(&self.default_network);
		match self.networks.get_key_value(name) {
			Some((key, profile)) => Ok((key.as_str(), profile)),
			None => {
				let mut known: Vec<&str> = self.networks.keys().map(String::as_str).collect();
				known.sort_unstable();
				Err(ConfigError::Validation(format!(
					"unknown network profile '{}'. Available profiles: {}",
					name,
					known.join(", ")
				)))
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SAMPLE: &str = r#"
artifacts_dir = "artifacts"
default_network = "blast-local"

[networks.blast-sepolia]
url = "https://sepolia.blast.io"
private_key = "${PRIVATE_KEY}"
gas_price_wei = 1000000000

[networks.blast-local]
url = "http://localhost:8545"
private_key = "${PRIVATE_KEY}"
gas_price_wei = 1000000000
"#;

	fn parse(content: &str) -> Result<Config, ConfigError> {
		let config: Config = toml::from_str(content)?;
		config.validate()?;
		Ok(config)
	}

	#[test]
	fn parses_sample_config() {
		let config = parse(SAMPLE).unwrap();
		assert_eq!(config.networks.len(), 2);
		assert_eq!(config.default_network, "blast-local");
		assert_eq!(
			config.networks["blast-sepolia"].gas_price_wei,
			1_000_000_000
		);
	}

	#[test]
	fn default_network_is_selected_when_no_override() {
		let config = parse(SAMPLE).unwrap();
		let (name, profile) = config.select_network(None).unwrap();
		assert_eq!(name, "blast-local");
		assert_eq!(profile.url, "http://localhost:8545");
	}

	#[test]
	fn explicit_override_wins() {
		let config = parse(SAMPLE).unwrap();
		let (name, profile) = config.select_network(Some("blast-sepolia")).unwrap();
		assert_eq!(name, "blast-sepolia");
		assert_eq!(profile.url, "https://sepolia.blast.io");
	}

	#[test]
	fn unknown_override_lists_available_profiles() {
		let config = parse(SAMPLE).unwrap();
		let err = config.select_network(Some("mainnet")).unwrap_err();
		let msg = err.to_string();
		assert!(msg.contains("unknown network profile 'mainnet'"));
		assert!(msg.contains("blast-local"));
		assert!(msg.contains("blast-sepolia"));
	}

	#[test]
	fn rejects_stray_profile_keys() {
		// A mistyped or stray token inside a profile must fail the parse,
		// not get dropped on the floor.
		let content = r#"
artifacts_dir = "artifacts"
default_network = "local"

[networks.local]
url = "http://localhost:8545"
private_key = "${PRIVATE_KEY}"
gas_price_wei = 1000000000
accounts = "oops"
"#;
		let err = parse(content).unwrap_err();
		assert!(matches!(err, ConfigError::Parse(_)));
	}

	#[test]
	fn rejects_missing_gas_price() {
		let content = r#"
artifacts_dir = "artifacts"
default_network = "local"

[networks.local]
url = "http://localhost:8545"
private_key = "${PRIVATE_KEY}"
"#;
		let err = parse(content).unwrap_err();
		assert!(matches!(err, ConfigError::Parse(_)));
		assert!(err.to_string().contains("gas_price_wei"));
	}

	#[test]
	fn rejects_unknown_default_network() {
		let content = r#"
artifacts_dir = "artifacts"
default_network = "mainnet"

[networks.local]
url = "http://localhost:8545"
private_key = "${PRIVATE_KEY}"
gas_price_wei = 0
"#;
		let err = parse(content).unwrap_err();
		assert!(matches!(err, ConfigError::Validation(_)));
	}

	#[test]
	fn rejects_empty_networks() {
		let content = r#"
artifacts_dir = "artifacts"
default_network = "local"

[networks]
"#;
		let err = parse(content).unwrap_err();
		assert!(err.to_string().contains("at least one network profile"));
	}

	#[test]
	fn rejects_non_http_url() {
		let content = r#"
artifacts_dir = "artifacts"
default_network = "local"

[networks.local]
url = "ws://localhost:8545"
private_key = "${PRIVATE_KEY}"
gas_price_wei = 1000000000
"#;
		let err = parse(content).unwrap_err();
		assert!(err.to_string().contains("non-HTTP RPC URL"));
	}

	#[test]
	fn zero_gas_price_is_allowed() {
		let content = r#"
artifacts_dir = "artifacts"
default_network = "local"

[networks.local]
url = "http://localhost:8545"
private_key = "${PRIVATE_KEY}"
gas_price_wei = 0
"#;
		let config = parse(content).unwrap();
		assert_eq!(config.networks["local"].gas_price_wei, 0);
	}

	#[test]
	fn from_file_surfaces_io_errors() {
		let dir = tempfile::tempdir().unwrap();
		let missing = dir.path().join("deployer.toml");
		let err = Config::from_file(&missing).unwrap_err();
		assert!(matches!(err, ConfigError::Io(_)));
	}

	#[test]
	fn from_file_loads_valid_config() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("deployer.toml");
		std::fs::write(&path, SAMPLE).unwrap();

		let config = Config::from_file(&path).unwrap();
		assert_eq!(config.artifacts_dir, PathBuf::from("artifacts"));
	}
}
