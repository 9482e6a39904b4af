//! In-memory proposal repository

use async_trait::async_trait;
use souk_application::RepositoryError;
use souk_application::ports::proposal_repository::ProposalRepository;
use souk_domain::{Proposal, ProposalHash, ProposalId};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Proposal store keyed by content hash, which is unique per proposal.
#[derive(Default)]
pub struct InMemoryProposalRepository {
    proposals: RwLock<HashMap<ProposalHash, Proposal>>,
}

impl InMemoryProposalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a proposal under its hash, replacing any previous record.
    pub async fn insert(&self, proposal: Proposal) {
        self.proposals
            .write()
            .await
            .insert(proposal.hash().clone(), proposal);
    }
}

#[async_trait]
impl ProposalRepository for InMemoryProposalRepository {
    async fn find_one(&self, id: ProposalId) -> Result<Option<Proposal>, RepositoryError> {
        Ok(self
            .proposals
            .read()
            .await
            .values()
            .find(|p| p.id() == Some(id))
            .cloned())
    }

    async fn find_one_by_hash(
        &self,
        hash: &ProposalHash,
    ) -> Result<Option<Proposal>, RepositoryError> {
        Ok(self.proposals.read().await.get(hash).cloned())
    }
}
