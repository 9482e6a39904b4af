//! RPC command trait and error taxonomy

use crate::rpc::gate::ParamSpec;
use crate::rpc::params::RpcParams;
use async_trait::async_trait;
use souk_application::RepositoryError;
use thiserror::Error;

/// What a resolution step failed to find.
///
/// Each step in a command's resolution sequence has its own kind so the
/// caller gets an actionable reason ("profile found but has no address" is
/// distinct from "profile missing").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundKind {
    Profile,
    ProfileAddress,
    Proposal,
    ProposalId,
    Setting,
}

impl std::fmt::Display for NotFoundKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotFoundKind::Profile => write!(f, "profile with id"),
            NotFoundKind::ProfileAddress => write!(f, "address for profile with id"),
            NotFoundKind::Proposal => write!(f, "proposal with hash"),
            NotFoundKind::ProposalId => write!(f, "proposal id for proposal with hash"),
            NotFoundKind::Setting => write!(f, "setting with key"),
        }
    }
}

/// Failures a command can surface to the RPC caller.
///
/// Every failure is terminal for the current invocation; none are
/// retryable. The distinguishing reason string is intended to be serialized
/// back as a structured error response.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Fewer or ill-typed parameters than the command requires.
    #[error("Expected: {usage}")]
    MalformedRequest { usage: &'static str },

    /// A resolution step could not produce its domain identifier.
    #[error("Couldn't find {kind} {identifier}")]
    NotFound {
        kind: NotFoundKind,
        identifier: String,
    },

    /// Persistence-layer fault, passed through unclassified.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Result could not be serialized for the caller.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CommandError {
    pub fn not_found(kind: NotFoundKind, identifier: impl Into<String>) -> Self {
        CommandError::NotFound {
            kind,
            identifier: identifier.into(),
        }
    }
}

/// A single RPC-verb handler.
///
/// `execute` assumes the request's static shape already passed the
/// pre-condition gate at the transport boundary; each command still runs
/// [`gate::enforce`](crate::rpc::gate::enforce) itself as its first step so
/// the contract holds no matter how it was invoked.
///
/// `help`, `description`, and `example` are static introspection surfaces
/// for CLI/help output, not business logic.
#[async_trait]
pub trait RpcCommand: Send + Sync {
    /// The RPC method name this command handles.
    fn name(&self) -> &'static str;

    /// Expected parameter count and shape.
    fn spec(&self) -> ParamSpec;

    /// Resolve parameters left-to-right and perform the terminal operation.
    ///
    /// Read-only resolution steps tolerate staleness: nothing holds a lock
    /// or transaction across steps.
    async fn execute(&self, params: RpcParams) -> Result<serde_json::Value, CommandError>;

    /// Usage line: method name plus parameter shape.
    fn help(&self) -> String {
        format!("{} {}", self.name(), self.spec().usage)
    }

    /// One-line human description.
    fn description(&self) -> String;

    /// A worked example invocation.
    fn example(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages_are_distinct_per_step() {
        let profile = CommandError::not_found(NotFoundKind::Profile, "2");
        let address = CommandError::not_found(NotFoundKind::ProfileAddress, "2");
        assert_eq!(profile.to_string(), "Couldn't find profile with id 2");
        assert_eq!(
            address.to_string(),
            "Couldn't find address for profile with id 2"
        );
        assert_ne!(profile.to_string(), address.to_string());
    }

    #[test]
    fn test_malformed_request_names_expected_shape() {
        let err = CommandError::MalformedRequest {
            usage: "<profileId> <proposalHash>",
        };
        assert_eq!(err.to_string(), "Expected: <profileId> <proposalHash>");
    }
}
