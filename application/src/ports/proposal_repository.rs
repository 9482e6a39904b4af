//! Proposal repository port

use crate::ports::RepositoryError;
use async_trait::async_trait;
use souk_domain::{Proposal, ProposalHash, ProposalId};

/// Persistence accessor for proposals.
#[async_trait]
pub trait ProposalRepository: Send + Sync {
    /// Look up a proposal by surrogate id. Absence is `Ok(None)`.
    async fn find_one(&self, id: ProposalId) -> Result<Option<Proposal>, RepositoryError>;

    /// Look up a proposal by content hash.
    ///
    /// The hash resolves to at most one proposal.
    async fn find_one_by_hash(
        &self,
        hash: &ProposalHash,
    ) -> Result<Option<Proposal>, RepositoryError>;
}
