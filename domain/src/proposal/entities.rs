//! Proposal domain entities

use crate::core::ids::ProposalId;
use crate::proposal::value_objects::ProposalHash;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A governance proposal voted on by profiles (Entity)
///
/// Identified externally by its content `hash` and internally by a surrogate
/// `id`. The id is assigned by storage; a proposal observed before it has
/// been persisted (or hydrated from a damaged row) carries none, and callers
/// that need the id must treat its absence as a resolution failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposal {
    id: Option<ProposalId>,
    hash: ProposalHash,
    title: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Proposal {
    pub fn new(id: Option<ProposalId>, hash: ProposalHash, title: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            hash,
            title: title.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Surrogate id, present once the proposal has been stored.
    pub fn id(&self) -> Option<ProposalId> {
        self.id
    }

    pub fn hash(&self) -> &ProposalHash {
        &self.hash
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
