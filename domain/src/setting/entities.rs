//! Setting domain entities

use crate::core::ids::{MarketId, ProfileId, SettingId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A key/value setting, optionally scoped to a profile and a market (Entity)
///
/// `(key, profile_id, market_id)` is the natural key for "the one setting";
/// `key` alone or `(key, profile_id)` are broader, multi-result lookups.
/// Only `key` and `value` are mutable after creation; scoping is fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Setting {
    id: SettingId,
    key: String,
    value: String,
    profile_id: Option<ProfileId>,
    market_id: Option<MarketId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Setting {
    pub fn new(
        id: SettingId,
        key: impl Into<String>,
        value: impl Into<String>,
        profile_id: Option<ProfileId>,
        market_id: Option<MarketId>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            key: key.into(),
            value: value.into(),
            profile_id,
            market_id,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> SettingId {
        self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn profile_id(&self) -> Option<ProfileId> {
        self.profile_id
    }

    pub fn market_id(&self) -> Option<MarketId> {
        self.market_id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Overwrite the mutable fields, bumping `updated_at`.
    ///
    /// Scoping (`profile_id`, `market_id`) and `created_at` are untouched.
    pub fn apply(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.key = key.into();
        self.value = value.into();
        self.updated_at = Utc::now();
    }
}
