//! Compiled contract artifacts.
//!
//! An artifact is the output of an external compilation step: creation
//! bytecode plus an ABI descriptor, identified by contract name. The
//! deployer only consumes artifacts; it never compiles. Both Hardhat-shaped
//! JSON (`"bytecode": "0x…"`) and Foundry-shaped JSON
//! (`"bytecode": {"object": "0x…"}`) are accepted.

use crate::without_0x_prefix;
use alloy_primitives::Bytes;
use serde_json::Value;
use thiserror::Error;

/// Errors raised while interpreting an artifact file.
#[derive(Debug, Error)]
pub enum ArtifactError {
	/// The artifact JSON has no ABI descriptor.
	#[error("artifact '{0}' has no abi field")]
	MissingAbi(String),
	/// The artifact JSON has no bytecode in a recognized shape.
	#[error("artifact '{0}' has no bytecode field")]
	MissingBytecode(String),
	/// The bytecode field is not valid hexadecimal.
	#[error("artifact '{0}' has invalid bytecode hex: {1}")]
	InvalidBytecode(String, String),
	/// The bytecode field decodes to zero bytes, e.g. an abstract contract
	/// or an interface. There is nothing to deploy.
	#[error("artifact '{0}' has empty bytecode; is the contract abstract?")]
	EmptyBytecode(String),
}

/// A named, pre-compiled contract ready for deployment.
#[derive(Debug, Clone)]
pub struct ContractArtifact {
	/// Contract name the artifact was resolved under.
	pub name: String,
	/// Creation bytecode submitted as the deployment transaction's data.
	pub bytecode: Bytes,
	/// Interface description as emitted by the compiler.
	pub abi: Value,
}

impl ContractArtifact {
	/// Interprets compiler-output JSON as a deployable artifact.
	pub fn from_json(name: &str, json: &Value) -> Result<Self, ArtifactError> {
		let abi = json
			.get("abi")
			.cloned()
			.ok_or_else(|| ArtifactError::MissingAbi(name.to_string()))?;

		let raw = match json.get("bytecode") {
			// Hardhat emits the creation code directly as a hex string.
			Some(Value::String(hex_str)) => hex_str.as_str(),
			// Foundry nests it under an "object" key.
			Some(Value::Object(obj)) => obj
				.get("object")
				.and_then(|o| o.as_str())
				.ok_or_else(|| ArtifactError::MissingBytecode(name.to_string()))?,
			_ => return Err(ArtifactError::MissingBytecode(name.to_string())),
		};

		let bytecode = hex::decode(without_0x_prefix(raw))
			.map_err(|e| ArtifactError::InvalidBytecode(name.to_string(), e.to_string()))?;
		if bytecode.is_empty() {
			return Err(ArtifactError::EmptyBytecode(name.to_string()));
		}

		Ok(Self {
			name: name.to_string(),
			bytecode: Bytes::from(bytecode),
			abi,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn parses_hardhat_shape() {
		let json = json!({
			"contractName": "PointsOption",
			"abi": [],
			"bytecode": "0x608060405234801561001057600080fd5b50",
		});

		let artifact = ContractArtifact::from_json("PointsOption", &json).unwrap();
		assert_eq!(artifact.name, "PointsOption");
		assert_eq!(artifact.bytecode.len(), 18);
	}

	#[test]
	fn parses_foundry_shape() {
		let json = json!({
			"abi": [],
			"bytecode": { "object": "0x608060405234801561001057600080fd5b50" },
		});

		let artifact = ContractArtifact::from_json("PointsOption", &json).unwrap();
		assert_eq!(artifact.bytecode.len(), 18);
	}

	#[test]
	fn both_shapes_decode_to_identical_bytecode() {
		let hardhat = json!({ "abi": [], "bytecode": "0xdeadbeef" });
		let foundry = json!({ "abi": [], "bytecode": { "object": "deadbeef" } });

		let a = ContractArtifact::from_json("A", &hardhat).unwrap();
		let b = ContractArtifact::from_json("A", &foundry).unwrap();
		assert_eq!(a.bytecode, b.bytecode);
	}

	#[test]
	fn rejects_missing_abi() {
		let json = json!({ "bytecode": "0xdeadbeef" });
		let err = ContractArtifact::from_json("X", &json).unwrap_err();
		assert!(matches!(err, ArtifactError::MissingAbi(_)));
	}

	#[test]
	fn rejects_missing_bytecode() {
		let json = json!({ "abi": [] });
		let err = ContractArtifact::from_json("X", &json).unwrap_err();
		assert!(matches!(err, ArtifactError::MissingBytecode(_)));
	}

	#[test]
	fn rejects_non_hex_bytecode() {
		let json = json!({ "abi": [], "bytecode": "0xzzzz" });
		let err = ContractArtifact::from_json("X", &json).unwrap_err();
		assert!(matches!(err, ArtifactError::InvalidBytecode(_, _)));
	}

	#[test]
	fn rejects_empty_bytecode() {
		let json = json!({ "abi": [], "bytecode": "0x" });
		let err = ContractArtifact::from_json("IPointsOption", &json).unwrap_err();
		assert!(matches!(err, ArtifactError::EmptyBytecode(_)));
		assert!(err.to_string().contains("IPointsOption"));
	}
}
