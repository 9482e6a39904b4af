//! Proposal service

use crate::ports::RepositoryError;
use crate::ports::proposal_repository::ProposalRepository;
use souk_domain::{Proposal, ProposalHash, ProposalId};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Errors from proposal lookups.
#[derive(Error, Debug)]
pub enum ProposalServiceError {
    #[error("Proposal with the id={0} was not found")]
    NotFound(ProposalId),

    #[error("Proposal with the hash={0} was not found")]
    NotFoundByHash(ProposalHash),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Read-side authority for proposal existence.
pub struct ProposalService {
    proposal_repo: Arc<dyn ProposalRepository>,
}

impl ProposalService {
    pub fn new(proposal_repo: Arc<dyn ProposalRepository>) -> Self {
        Self { proposal_repo }
    }

    /// Strict finder by surrogate id.
    pub async fn find_one(&self, id: ProposalId) -> Result<Proposal, ProposalServiceError> {
        match self.proposal_repo.find_one(id).await? {
            Some(proposal) => Ok(proposal),
            None => {
                warn!("Proposal with the id={} was not found", id);
                Err(ProposalServiceError::NotFound(id))
            }
        }
    }

    /// Strict finder by content hash.
    pub async fn find_one_by_hash(
        &self,
        hash: &ProposalHash,
    ) -> Result<Proposal, ProposalServiceError> {
        match self.proposal_repo.find_one_by_hash(hash).await? {
            Some(proposal) => Ok(proposal),
            None => {
                warn!("Proposal with the hash={} was not found", hash);
                Err(ProposalServiceError::NotFoundByHash(hash.clone()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockProposalRepository {
        proposals: Mutex<Vec<Proposal>>,
    }

    impl MockProposalRepository {
        fn new(proposals: Vec<Proposal>) -> Self {
            Self {
                proposals: Mutex::new(proposals),
            }
        }
    }

    #[async_trait]
    impl ProposalRepository for MockProposalRepository {
        async fn find_one(&self, id: ProposalId) -> Result<Option<Proposal>, RepositoryError> {
            Ok(self
                .proposals
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.id() == Some(id))
                .cloned())
        }

        async fn find_one_by_hash(
            &self,
            hash: &ProposalHash,
        ) -> Result<Option<Proposal>, RepositoryError> {
            Ok(self
                .proposals
                .lock()
                .unwrap()
                .iter()
                .find(|p| p.hash() == hash)
                .cloned())
        }
    }

    fn hash(s: &str) -> ProposalHash {
        ProposalHash::try_new(s).unwrap()
    }

    #[tokio::test]
    async fn test_find_one_by_hash() {
        let repo = Arc::new(MockProposalRepository::new(vec![Proposal::new(
            Some(ProposalId::new(9)),
            hash("0xHash"),
            "List fees",
        )]));
        let service = ProposalService::new(repo);

        let proposal = service.find_one_by_hash(&hash("0xHash")).await.unwrap();
        assert_eq!(proposal.id(), Some(ProposalId::new(9)));
    }

    #[tokio::test]
    async fn test_find_one_by_hash_missing() {
        let repo = Arc::new(MockProposalRepository::new(vec![]));
        let service = ProposalService::new(repo);

        let err = service.find_one_by_hash(&hash("0xNope")).await.unwrap_err();
        assert!(matches!(err, ProposalServiceError::NotFoundByHash(_)));
    }
}
