//! `setting.set`: create or update a setting under a natural key.

use crate::rpc::command::{CommandError, NotFoundKind, RpcCommand};
use crate::rpc::commands::resolve_profile;
use crate::rpc::gate::{self, ParamSpec};
use crate::rpc::params::RpcParams;
use async_trait::async_trait;
use souk_application::{ProfileService, SettingService, SettingServiceError};
use souk_domain::{MarketId, ProfileId, SettingCreateRequest, SettingUpdateRequest};
use std::sync::Arc;
use tracing::debug;

const USAGE: &str = "<profileId> <marketId> <settingKey> <settingValue>";

/// Resolves `[profileId, marketId, key, value]` and upserts: an existing
/// setting under the natural key is updated, otherwise one is created.
///
/// Either branch ends in exactly one terminal write after resolution.
pub struct SettingSetCommand {
    setting_service: Arc<SettingService>,
    profile_service: Arc<ProfileService>,
}

impl SettingSetCommand {
    pub fn new(setting_service: Arc<SettingService>, profile_service: Arc<ProfileService>) -> Self {
        Self {
            setting_service,
            profile_service,
        }
    }
}

#[async_trait]
impl RpcCommand for SettingSetCommand {
    fn name(&self) -> &'static str {
        "setting.set"
    }

    fn spec(&self) -> ParamSpec {
        ParamSpec::new(4, USAGE)
    }

    async fn execute(&self, mut params: RpcParams) -> Result<serde_json::Value, CommandError> {
        gate::enforce(&self.spec(), &params)?;

        let profile_id = ProfileId::new(params.take_u64(USAGE)?);
        let market_id = MarketId::new(params.take_u64(USAGE)?);
        let key = params.take_string(USAGE)?;
        let value = params.take_string(USAGE)?;

        let profile = resolve_profile(&self.profile_service, profile_id).await?;

        let existing = match self
            .setting_service
            .find_one_by_key_and_profile_id_and_market_id(&key, profile.id(), market_id, false)
            .await
        {
            Ok(setting) => Some(setting),
            Err(SettingServiceError::NotFoundByKey(_)) => None,
            Err(SettingServiceError::NotFound(_)) => None,
            Err(SettingServiceError::Repository(e)) => return Err(e.into()),
        };

        let setting = match existing {
            Some(setting) => {
                debug!("setting.set: updating existing setting id={}", setting.id());
                self.setting_service
                    .update(setting.id(), SettingUpdateRequest::new(key, value))
                    .await
            }
            None => {
                debug!("setting.set: creating key={} for profile={}", key, profile_id);
                self.setting_service
                    .create(
                        SettingCreateRequest::new(key, value)
                            .with_profile_id(profile.id())
                            .with_market_id(market_id),
                    )
                    .await
            }
        }
        .map_err(|e| match e {
            SettingServiceError::Repository(e) => CommandError::from(e),
            // The row was resolved just above; losing it mid-write is a
            // stale read the design accepts, surfaced as the setting step.
            other => CommandError::not_found(NotFoundKind::Setting, other.to_string()),
        })?;

        Ok(serde_json::to_value(setting)?)
    }

    fn description(&self) -> String {
        "Set a setting value for a profile and market, creating it if absent.".to_string()
    }

    fn example(&self) -> String {
        "setting.set 1 2 currency PART".to_string()
    }
}
