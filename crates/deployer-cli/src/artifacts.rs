//! Artifact resolution.
//!
//! Looks up compiled contract artifacts by name under a single directory.
//! Both flat `<name>.json` files and Foundry-style `<name>.sol/<name>.json`
//! layouts are accepted. Resolution is purely local; an unknown name fails
//! before any network call is made.

use deployer_types::{ArtifactError, ContractArtifact};
use serde_json::Value;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Errors raised while resolving a named artifact.
#[derive(Debug, Error)]
pub enum StoreError {
	/// No artifact file exists for the requested name.
	#[error("contract '{name}' not found under {}", dir.display())]
	NotFound { name: String, dir: PathBuf },
	/// An artifact file exists but could not be read.
	#[error("failed to read {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	/// An artifact file exists but is not valid JSON.
	#[error("invalid JSON in {}: {source}", path.display())]
	Json {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},
	/// The JSON is well-formed but not a usable artifact.
	#[error(transparent)]
	Artifact(#[from] ArtifactError),
}

/// Name-addressable store over a directory of compiler output.
pub struct ArtifactStore {
	dir: PathBuf,
}

impl ArtifactStore {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	/// Resolves a named artifact.
	pub fn load(&self, name: &str) -> Result<ContractArtifact, StoreError> {
		let candidates = [
			self.dir.join(format!("{name}.json")),
			self.dir.join(format!("{name}.sol")).join(format!("{name}.json")),
		];

		for path in &candidates {
			if !path.exists() {
				continue;
			}
			debug!(path = %path.display(), "loading contract artifact");

			let content = std::fs::read_to_string(path).map_err(|e| StoreError::Io {
				path: path.clone(),
				source: e,
			})?;
			let json: Value = serde_json::from_str(&content).map_err(|e| StoreError::Json {
				path: path.clone(),
				source: e,
			})?;

			return Ok(ContractArtifact::from_json(name, &json)?);
		}

		Err(StoreError::NotFound {
			name: name.to_string(),
			dir: self.dir.clone(),
		})
	}

	/// Names of every artifact present under the store directory, sorted.
	pub fn list(&self) -> Result<Vec<String>, StoreError> {
		let mut names = Vec::new();
		if !self.dir.exists() {
			return Ok(names);
		}

		let entries = std::fs::read_dir(&self.dir).map_err(|e| StoreError::Io {
			path: self.dir.clone(),
			source: e,
		})?;

		for entry in entries.flatten() {
			let file_name = entry.file_name();
			let Some(file_name) = file_name.to_str() else {
				continue;
			};

			if let Some(stem) = file_name.strip_suffix(".json") {
				names.push(stem.to_string());
			} else if file_name.ends_with(".sol") && entry.path().is_dir() {
				if let Ok(inner) = std::fs::read_dir(entry.path()) {
					for json_entry in inner.flatten() {
						if let Some(json_name) = json_entry.file_name().to_str() {
							if let Some(stem) = json_name.strip_suffix(".json") {
								names.push(stem.to_string());
							}
						}
					}
				}
			}
		}

		names.sort();
		names.dedup();
		Ok(names)
	}
}
