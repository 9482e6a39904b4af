//! In-memory vote repository

use async_trait::async_trait;
use souk_application::RepositoryError;
use souk_application::ports::vote_repository::VoteRepository;
use souk_domain::{Address, ProposalId, Vote, VoteId};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Vote store backed by a `RwLock<HashMap>`.
#[derive(Default)]
pub struct InMemoryVoteRepository {
    votes: RwLock<HashMap<VoteId, Vote>>,
}

impl InMemoryVoteRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a vote under its own id, replacing any previous record.
    pub async fn insert(&self, vote: Vote) {
        self.votes.write().await.insert(vote.id(), vote);
    }
}

#[async_trait]
impl VoteRepository for InMemoryVoteRepository {
    async fn find_one(&self, id: VoteId) -> Result<Option<Vote>, RepositoryError> {
        Ok(self.votes.read().await.get(&id).cloned())
    }

    async fn find_one_by_voter_and_proposal(
        &self,
        voter: &Address,
        proposal_id: ProposalId,
    ) -> Result<Option<Vote>, RepositoryError> {
        Ok(self
            .votes
            .read()
            .await
            .values()
            .find(|v| v.voter() == voter && v.proposal_id() == proposal_id)
            .cloned())
    }
}
