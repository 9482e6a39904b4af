//! Profile domain entities

use crate::core::ids::ProfileId;
use crate::profile::value_objects::Address;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A marketplace identity (Entity)
///
/// The `address` is derived from the profile's wallet and is what votes are
/// recorded against. A profile without a resolvable address is incomplete
/// and unusable for voting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    id: ProfileId,
    name: String,
    address: Option<Address>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn new(id: ProfileId, name: impl Into<String>, address: Option<Address>) -> Self {
        let now = Utc::now();
        Self {
            id,
            name: name.into(),
            address,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> ProfileId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The derived voting address, if the profile has one.
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
