//! Secure string type for handling sensitive data.

use std::fmt;

/// A string wrapper that keeps key material out of logs.
///
/// The inner value is only reachable through [`SecretString::with_exposed`],
/// and the `Debug` representation is redacted, so a signing key held in one
/// of these cannot leak through tracing output or error formatting.
#[derive(Clone)]
pub struct SecretString(String);

impl SecretString {
	/// Runs `f` with the secret exposed and returns its result.
	pub fn with_exposed<T>(&self, f: impl FnOnce(&str) -> T) -> T {
		f(&self.0)
	}
}

impl From<String> for SecretString {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl From<&str> for SecretString {
	fn from(value: &str) -> Self {
		Self(value.to_string())
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("SecretString(<redacted>)")
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn debug_output_is_redacted() {
		let secret = SecretString::from("0xac0974bec39a17e36ba4a6b4d238ff94");
		let debug = format!("{:?}", secret);
		assert_eq!(debug, "SecretString(<redacted>)");
		assert!(!debug.contains("ac0974"));
	}

	#[test]
	fn with_exposed_yields_inner_value() {
		let secret = SecretString::from("hunter2");
		assert_eq!(secret.with_exposed(|s| s.len()), 7);
		assert!(secret.with_exposed(|s| s == "hunter2"));
	}
}
