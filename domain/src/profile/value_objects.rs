//! Profile value objects

use serde::{Deserialize, Serialize};

/// A blockchain-style address derived from a profile (Value Object)
///
/// Used as the voter identity when casting or looking up votes. An address
/// is always non-empty; a profile whose derivation produced nothing carries
/// `None` instead of an empty `Address`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// Try to create an address, returning None for empty/whitespace input.
    pub fn try_new(value: impl Into<String>) -> Option<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            None
        } else {
            Some(Self(value))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
