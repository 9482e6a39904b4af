//! Vote domain entities

use crate::core::ids::{ProposalId, VoteId};
use crate::profile::value_objects::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How a voter resolved a proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum VoteOutcome {
    Yes,
    No,
    Abstain,
}

impl std::fmt::Display for VoteOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VoteOutcome::Yes => write!(f, "YES"),
            VoteOutcome::No => write!(f, "NO"),
            VoteOutcome::Abstain => write!(f, "ABSTAIN"),
        }
    }
}

/// A vote cast by a voter address on a proposal (Entity)
///
/// At most one vote per `(voter, proposal_id)` pair is meaningful for
/// lookup; a re-cast vote replaces the earlier fact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vote {
    id: VoteId,
    voter: Address,
    proposal_id: ProposalId,
    outcome: VoteOutcome,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Vote {
    pub fn new(id: VoteId, voter: Address, proposal_id: ProposalId, outcome: VoteOutcome) -> Self {
        let now = Utc::now();
        Self {
            id,
            voter,
            proposal_id,
            outcome,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> VoteId {
        self.id
    }

    pub fn voter(&self) -> &Address {
        &self.voter
    }

    pub fn proposal_id(&self) -> ProposalId {
        self.proposal_id
    }

    pub fn outcome(&self) -> VoteOutcome {
        self.outcome
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
