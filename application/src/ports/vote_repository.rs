//! Vote repository port

use crate::ports::RepositoryError;
use async_trait::async_trait;
use souk_domain::{Address, ProposalId, Vote, VoteId};

/// Persistence accessor for votes.
#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Look up a vote by surrogate id. Absence is `Ok(None)`.
    async fn find_one(&self, id: VoteId) -> Result<Option<Vote>, RepositoryError>;

    /// The one vote this voter cast on this proposal, if any.
    async fn find_one_by_voter_and_proposal(
        &self,
        voter: &Address,
        proposal_id: ProposalId,
    ) -> Result<Option<Vote>, RepositoryError>;
}
