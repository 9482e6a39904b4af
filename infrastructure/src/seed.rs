//! Seed-file loader
//!
//! Loads a JSON fixture into the in-memory repositories at startup so a
//! process without a real database still has records to resolve. Seed
//! records are a flat, hand-editable shape, converted into domain entities
//! on apply.

use crate::memory::{
    profiles::InMemoryProfileRepository, proposals::InMemoryProposalRepository,
    settings::InMemorySettingRepository, votes::InMemoryVoteRepository,
};
use serde::{Deserialize, Serialize};
use souk_application::RepositoryError;
use souk_application::ports::setting_repository::SettingRepository;
use souk_domain::{
    Address, MarketId, Profile, ProfileId, Proposal, ProposalHash, ProposalId,
    SettingCreateRequest, Vote, VoteId, VoteOutcome,
};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Errors from loading or applying a seed file.
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Could not read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid seed record: {0}")]
    Invalid(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileSeed {
    pub id: u64,
    pub name: String,
    /// Empty or missing means the profile has no derived address.
    #[serde(default)]
    pub address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProposalSeed {
    pub id: u64,
    pub hash: String,
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteSeed {
    pub voter: String,
    pub proposal_id: u64,
    pub outcome: VoteOutcome,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingSeed {
    pub key: String,
    pub value: String,
    #[serde(default)]
    pub profile_id: Option<u64>,
    #[serde(default)]
    pub market_id: Option<u64>,
}

/// A startup fixture: every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub profiles: Vec<ProfileSeed>,
    #[serde(default)]
    pub proposals: Vec<ProposalSeed>,
    #[serde(default)]
    pub votes: Vec<VoteSeed>,
    #[serde(default)]
    pub settings: Vec<SettingSeed>,
}

impl SeedFile {
    /// Read and parse a seed file from disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Apply every record into the in-memory repositories.
    ///
    /// Vote ids are assigned in file order; setting ids come from the
    /// repository's own sequence.
    pub async fn apply(
        &self,
        profiles: &InMemoryProfileRepository,
        proposals: &InMemoryProposalRepository,
        votes: &InMemoryVoteRepository,
        settings: &InMemorySettingRepository,
    ) -> Result<(), SeedError> {
        for seed in &self.profiles {
            let address = seed.address.as_deref().and_then(Address::try_new);
            profiles
                .insert(Profile::new(ProfileId::new(seed.id), &seed.name, address))
                .await;
        }

        for seed in &self.proposals {
            let hash = ProposalHash::try_new(&seed.hash)
                .ok_or_else(|| SeedError::Invalid(format!("proposal {} has no hash", seed.id)))?;
            proposals
                .insert(Proposal::new(
                    Some(ProposalId::new(seed.id)),
                    hash,
                    &seed.title,
                ))
                .await;
        }

        for (index, seed) in self.votes.iter().enumerate() {
            let voter = Address::try_new(&seed.voter).ok_or_else(|| {
                SeedError::Invalid(format!("vote #{} has no voter address", index + 1))
            })?;
            votes
                .insert(Vote::new(
                    VoteId::new(index as u64 + 1),
                    voter,
                    ProposalId::new(seed.proposal_id),
                    seed.outcome,
                ))
                .await;
        }

        for seed in &self.settings {
            let mut request = SettingCreateRequest::new(&seed.key, &seed.value);
            if let Some(profile_id) = seed.profile_id {
                request = request.with_profile_id(ProfileId::new(profile_id));
            }
            if let Some(market_id) = seed.market_id {
                request = request.with_market_id(MarketId::new(market_id));
            }
            settings.create(request).await?;
        }

        info!(
            "Seeded {} profiles, {} proposals, {} votes, {} settings",
            self.profiles.len(),
            self.proposals.len(),
            self.votes.len(),
            self.settings.len()
        );
        Ok(())
    }
}
