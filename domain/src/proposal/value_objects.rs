//! Proposal value objects

use serde::{Deserialize, Serialize};

/// Content hash identifying a proposal (Value Object)
///
/// The hash is computed over the proposal message as it travels the network
/// and uniquely resolves to at most one proposal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProposalHash(String);

impl ProposalHash {
    /// Try to create a hash, returning None for empty/whitespace input.
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

impl std::fmt::Display for ProposalHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new() {
        assert!(ProposalHash::try_new("0xdeadbeef").is_some());
        assert!(ProposalHash::try_new("").is_none());
    }
}
