//! Vote service

use crate::ports::RepositoryError;
use crate::ports::vote_repository::VoteRepository;
use souk_domain::{Address, ProposalId, Vote, VoteId};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

/// Errors from vote lookups.
#[derive(Error, Debug)]
pub enum VoteServiceError {
    #[error("Vote with the id={0} was not found")]
    NotFound(VoteId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Read-side authority for vote existence.
pub struct VoteService {
    vote_repo: Arc<dyn VoteRepository>,
}

impl VoteService {
    pub fn new(vote_repo: Arc<dyn VoteRepository>) -> Self {
        Self { vote_repo }
    }

    /// Strict finder by surrogate id.
    pub async fn find_one(&self, id: VoteId) -> Result<Vote, VoteServiceError> {
        match self.vote_repo.find_one(id).await? {
            Some(vote) => Ok(vote),
            None => {
                warn!("Vote with the id={} was not found", id);
                Err(VoteServiceError::NotFound(id))
            }
        }
    }

    /// The vote this voter cast on this proposal.
    ///
    /// Unlike the strict finders, absence here is a valid answer ("has not
    /// voted"), so the result stays an `Option` rather than a failure.
    pub async fn find_one_by_voter_and_proposal(
        &self,
        voter: &Address,
        proposal_id: ProposalId,
    ) -> Result<Option<Vote>, VoteServiceError> {
        let vote = self
            .vote_repo
            .find_one_by_voter_and_proposal(voter, proposal_id)
            .await?;
        if vote.is_none() {
            debug!(
                "No vote by voter={} on proposal={}",
                voter, proposal_id
            );
        }
        Ok(vote)
    }
}
