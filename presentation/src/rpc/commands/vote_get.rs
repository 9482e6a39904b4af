//! `vote.get`: look up the vote a profile cast on a proposal.

use crate::rpc::command::{CommandError, NotFoundKind, RpcCommand};
use crate::rpc::commands::resolve_profile;
use crate::rpc::gate::{self, ParamSpec};
use crate::rpc::params::RpcParams;
use async_trait::async_trait;
use souk_application::{
    ProfileService, ProposalService, ProposalServiceError, VoteService, VoteServiceError,
};
use souk_domain::{ProfileId, ProposalHash};
use std::sync::Arc;
use tracing::debug;

const USAGE: &str = "<profileId> <proposalHash>";

/// Resolves `[profileId, proposalHash]` to `(voterAddress, proposalId)` and
/// returns the matching vote, or JSON null when the profile has not voted.
///
/// Resolution is strict left-to-right and each step short-circuits with its
/// own reason:
/// 1. profile by id: missing profile and missing derived address are
///    distinct failures;
/// 2. proposal by hash: missing proposal and missing surrogate id are
///    distinct failures;
/// 3. vote by `(address, proposalId)`: absence is a valid answer, not an
///    error.
///
/// The three steps are not transactional; read-only lookups tolerate
/// staleness.
pub struct VoteGetCommand {
    vote_service: Arc<VoteService>,
    profile_service: Arc<ProfileService>,
    proposal_service: Arc<ProposalService>,
}

impl VoteGetCommand {
    pub fn new(
        vote_service: Arc<VoteService>,
        profile_service: Arc<ProfileService>,
        proposal_service: Arc<ProposalService>,
    ) -> Self {
        Self {
            vote_service,
            profile_service,
            proposal_service,
        }
    }
}

#[async_trait]
impl RpcCommand for VoteGetCommand {
    fn name(&self) -> &'static str {
        "vote.get"
    }

    fn spec(&self) -> ParamSpec {
        ParamSpec::new(2, USAGE)
    }

    async fn execute(&self, mut params: RpcParams) -> Result<serde_json::Value, CommandError> {
        gate::enforce(&self.spec(), &params)?;

        // Step 1: profile id -> voter address
        let profile_id = ProfileId::new(params.take_u64(USAGE)?);
        let profile = resolve_profile(&self.profile_service, profile_id).await?;
        let voter = profile
            .address()
            .ok_or_else(|| {
                CommandError::not_found(NotFoundKind::ProfileAddress, profile_id.to_string())
            })?
            .clone();

        // Step 2: proposal hash -> proposal id
        let raw_hash = params.take_string(USAGE)?;
        let hash = ProposalHash::try_new(raw_hash)
            .ok_or(CommandError::MalformedRequest { usage: USAGE })?;
        let proposal = match self.proposal_service.find_one_by_hash(&hash).await {
            Ok(proposal) => proposal,
            Err(ProposalServiceError::NotFoundByHash(h)) => {
                return Err(CommandError::not_found(NotFoundKind::Proposal, h.to_string()));
            }
            Err(ProposalServiceError::NotFound(id)) => {
                return Err(CommandError::not_found(NotFoundKind::Proposal, id.to_string()));
            }
            Err(ProposalServiceError::Repository(e)) => return Err(e.into()),
        };
        let proposal_id = proposal.id().ok_or_else(|| {
            CommandError::not_found(NotFoundKind::ProposalId, hash.to_string())
        })?;

        // Step 3: the terminal lookup
        debug!(
            "Resolved voter={} proposal={} for vote lookup",
            voter, proposal_id
        );
        let vote = match self
            .vote_service
            .find_one_by_voter_and_proposal(&voter, proposal_id)
            .await
        {
            Ok(vote) => vote,
            Err(VoteServiceError::Repository(e)) => return Err(e.into()),
            // find_one_by_voter_and_proposal never reports NotFound
            Err(VoteServiceError::NotFound(_)) => None,
        };

        match vote {
            Some(vote) => Ok(serde_json::to_value(vote)?),
            None => Ok(serde_json::Value::Null),
        }
    }

    fn description(&self) -> String {
        "Get the vote a profile cast on a proposal.".to_string()
    }

    fn example(&self) -> String {
        "vote.get 1 0xa1b2c3".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use souk_application::ports::{
        RepositoryError, profile_repository::ProfileRepository,
        proposal_repository::ProposalRepository, vote_repository::VoteRepository,
    };
    use souk_domain::{
        Address, Profile, Proposal, ProposalId, Vote, VoteId, VoteOutcome,
    };
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockProfileRepository {
        profiles: Vec<Profile>,
    }

    #[async_trait]
    impl ProfileRepository for MockProfileRepository {
        async fn find_one(&self, id: ProfileId) -> Result<Option<Profile>, RepositoryError> {
            Ok(self.profiles.iter().find(|p| p.id() == id).cloned())
        }

        async fn find_all(&self) -> Result<Vec<Profile>, RepositoryError> {
            Ok(self.profiles.clone())
        }
    }

    /// Counts hash lookups so tests can assert short-circuiting.
    struct MockProposalRepository {
        proposals: Vec<Proposal>,
        hash_lookups: AtomicUsize,
    }

    impl MockProposalRepository {
        fn new(proposals: Vec<Proposal>) -> Self {
            Self {
                proposals,
                hash_lookups: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl ProposalRepository for MockProposalRepository {
        async fn find_one(&self, id: ProposalId) -> Result<Option<Proposal>, RepositoryError> {
            Ok(self.proposals.iter().find(|p| p.id() == Some(id)).cloned())
        }

        async fn find_one_by_hash(
            &self,
            hash: &ProposalHash,
        ) -> Result<Option<Proposal>, RepositoryError> {
            self.hash_lookups.fetch_add(1, Ordering::SeqCst);
            Ok(self.proposals.iter().find(|p| p.hash() == hash).cloned())
        }
    }

    /// Counts voter/proposal lookups so tests can assert short-circuiting.
    struct MockVoteRepository {
        votes: Mutex<Vec<Vote>>,
        lookups: AtomicUsize,
    }

    impl MockVoteRepository {
        fn new(votes: Vec<Vote>) -> Self {
            Self {
                votes: Mutex::new(votes),
                lookups: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl VoteRepository for MockVoteRepository {
        async fn find_one(&self, id: VoteId) -> Result<Option<Vote>, RepositoryError> {
            Ok(self
                .votes
                .lock()
                .unwrap()
                .iter()
                .find(|v| v.id() == id)
                .cloned())
        }

        async fn find_one_by_voter_and_proposal(
            &self,
            voter: &Address,
            proposal_id: ProposalId,
        ) -> Result<Option<Vote>, RepositoryError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            Ok(self
                .votes
                .lock()
                .unwrap()
                .iter()
                .find(|v| v.voter() == voter && v.proposal_id() == proposal_id)
                .cloned())
        }
    }

    struct Fixture {
        command: VoteGetCommand,
        proposal_repo: Arc<MockProposalRepository>,
        vote_repo: Arc<MockVoteRepository>,
    }

    /// Storage per the concrete scenario: Profile{1, "PAbc..."},
    /// Proposal{9, "0xHash"}, Vote{"PAbc...", 9, YES}; profile 3 exists but
    /// has no derived address.
    fn fixture() -> Fixture {
        let profile_repo = Arc::new(MockProfileRepository {
            profiles: vec![
                Profile::new(ProfileId::new(1), "alice", Address::try_new("PAbc123")),
                Profile::new(ProfileId::new(3), "carol", None),
            ],
        });
        let proposal_repo = Arc::new(MockProposalRepository::new(vec![Proposal::new(
            Some(ProposalId::new(9)),
            ProposalHash::try_new("0xHash").unwrap(),
            "List fees",
        )]));
        let vote_repo = Arc::new(MockVoteRepository::new(vec![Vote::new(
            VoteId::new(1),
            Address::try_new("PAbc123").unwrap(),
            ProposalId::new(9),
            VoteOutcome::Yes,
        )]));

        let command = VoteGetCommand::new(
            Arc::new(VoteService::new(vote_repo.clone())),
            Arc::new(ProfileService::new(profile_repo)),
            Arc::new(ProposalService::new(proposal_repo.clone())),
        );
        Fixture {
            command,
            proposal_repo,
            vote_repo,
        }
    }

    #[tokio::test]
    async fn test_returns_the_vote() {
        let fx = fixture();
        let result = fx
            .command
            .execute(RpcParams::new([json!("1"), json!("0xHash")]))
            .await
            .unwrap();
        assert_eq!(result["outcome"], json!("YES"));
        assert_eq!(result["proposal_id"], json!(9));
    }

    #[tokio::test]
    async fn test_no_vote_is_null_not_an_error() {
        let fx = fixture();
        fx.vote_repo.votes.lock().unwrap().clear();

        let result = fx
            .command
            .execute(RpcParams::new([json!("1"), json!("0xHash")]))
            .await
            .unwrap();
        assert_eq!(result, serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_too_few_params_is_malformed() {
        let fx = fixture();
        for params in [RpcParams::default(), RpcParams::new([json!("1")])] {
            let err = fx.command.execute(params).await.unwrap_err();
            assert!(matches!(err, CommandError::MalformedRequest { .. }));
        }
    }

    #[tokio::test]
    async fn test_unknown_profile_short_circuits() {
        let fx = fixture();
        let err = fx
            .command
            .execute(RpcParams::new([json!("2"), json!("0xHash")]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CommandError::NotFound { kind: NotFoundKind::Profile, ref identifier } if identifier == "2"
        ));
        // The proposal resolver was never consulted
        assert_eq!(fx.proposal_repo.hash_lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_profile_without_address_is_a_distinct_failure() {
        let fx = fixture();
        let err = fx
            .command
            .execute(RpcParams::new([json!("3"), json!("0xHash")]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CommandError::NotFound { kind: NotFoundKind::ProfileAddress, ref identifier } if identifier == "3"
        ));
        assert_eq!(fx.proposal_repo.hash_lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unknown_hash_short_circuits() {
        let fx = fixture();
        let err = fx
            .command
            .execute(RpcParams::new([json!("1"), json!("0xOther")]))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CommandError::NotFound { kind: NotFoundKind::Proposal, ref identifier } if identifier == "0xOther"
        ));
        // The vote lookup was never consulted
        assert_eq!(fx.vote_repo.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_proposal_without_id_is_a_distinct_failure() {
        let profile_repo = Arc::new(MockProfileRepository {
            profiles: vec![Profile::new(
                ProfileId::new(1),
                "alice",
                Address::try_new("PAbc123"),
            )],
        });
        // A proposal hydrated without its surrogate id
        let proposal_repo = Arc::new(MockProposalRepository::new(vec![Proposal::new(
            None,
            ProposalHash::try_new("0xHash").unwrap(),
            "List fees",
        )]));
        let vote_repo = Arc::new(MockVoteRepository::new(vec![]));
        let command = VoteGetCommand::new(
            Arc::new(VoteService::new(vote_repo.clone())),
            Arc::new(ProfileService::new(profile_repo)),
            Arc::new(ProposalService::new(proposal_repo)),
        );

        let err = command
            .execute(RpcParams::new([json!("1"), json!("0xHash")]))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CommandError::NotFound { kind: NotFoundKind::ProposalId, ref identifier } if identifier == "0xHash"
        ));
        assert_eq!(vote_repo.lookups.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_help_surfaces() {
        let fx = fixture();
        assert_eq!(fx.command.name(), "vote.get");
        assert_eq!(fx.command.help(), "vote.get <profileId> <proposalHash>");
        assert!(!fx.command.description().is_empty());
        assert!(fx.command.example().starts_with("vote.get"));
    }
}
