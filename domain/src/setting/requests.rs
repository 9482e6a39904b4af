//! Setting create/update payloads
//!
//! Distinct from the stored [`Setting`](crate::Setting) entity: requests have
//! no id or timestamps, and the update request carries only the mutable
//! fields. Both are assumed to have passed the request-shape gate before a
//! service sees them.

use crate::core::ids::{MarketId, ProfileId};
use serde::{Deserialize, Serialize};

/// Payload for creating a setting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingCreateRequest {
    pub key: String,
    pub value: String,
    pub profile_id: Option<ProfileId>,
    pub market_id: Option<MarketId>,
}

impl SettingCreateRequest {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            profile_id: None,
            market_id: None,
        }
    }

    pub fn with_profile_id(mut self, profile_id: ProfileId) -> Self {
        self.profile_id = Some(profile_id);
        self
    }

    pub fn with_market_id(mut self, market_id: MarketId) -> Self {
        self.market_id = Some(market_id);
        self
    }
}

/// Payload for updating a setting's mutable fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingUpdateRequest {
    pub key: String,
    pub value: String,
}

impl SettingUpdateRequest {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}
