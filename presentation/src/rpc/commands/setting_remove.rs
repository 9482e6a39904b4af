//! `setting.remove`: delete the one setting under a natural key.

use crate::rpc::command::{CommandError, NotFoundKind, RpcCommand};
use crate::rpc::commands::resolve_profile;
use crate::rpc::gate::{self, ParamSpec};
use crate::rpc::params::RpcParams;
use async_trait::async_trait;
use souk_application::{ProfileService, SettingService, SettingServiceError};
use souk_domain::{MarketId, ProfileId};
use std::sync::Arc;

const USAGE: &str = "<profileId> <marketId> <settingKey>";

/// Resolves `[profileId, marketId, key]` and deletes the matching setting.
///
/// Deletion goes through the strict natural-key finder, so a non-matching
/// triple fails `NotFound` and deletes nothing.
pub struct SettingRemoveCommand {
    setting_service: Arc<SettingService>,
    profile_service: Arc<ProfileService>,
}

impl SettingRemoveCommand {
    pub fn new(setting_service: Arc<SettingService>, profile_service: Arc<ProfileService>) -> Self {
        Self {
            setting_service,
            profile_service,
        }
    }
}

#[async_trait]
impl RpcCommand for SettingRemoveCommand {
    fn name(&self) -> &'static str {
        "setting.remove"
    }

    fn spec(&self) -> ParamSpec {
        ParamSpec::new(3, USAGE)
    }

    async fn execute(&self, mut params: RpcParams) -> Result<serde_json::Value, CommandError> {
        gate::enforce(&self.spec(), &params)?;

        let profile_id = ProfileId::new(params.take_u64(USAGE)?);
        let market_id = MarketId::new(params.take_u64(USAGE)?);
        let key = params.take_string(USAGE)?;

        let profile = resolve_profile(&self.profile_service, profile_id).await?;

        match self
            .setting_service
            .destroy_by_key_and_profile_id_and_market_id(&key, profile.id(), market_id)
            .await
        {
            Ok(()) => Ok(serde_json::Value::Null),
            Err(SettingServiceError::NotFoundByKey(key)) => {
                Err(CommandError::not_found(NotFoundKind::Setting, key))
            }
            Err(SettingServiceError::NotFound(id)) => {
                Err(CommandError::not_found(NotFoundKind::Setting, id.to_string()))
            }
            Err(SettingServiceError::Repository(e)) => Err(e.into()),
        }
    }

    fn description(&self) -> String {
        "Remove a setting scoped to a profile and market.".to_string()
    }

    fn example(&self) -> String {
        "setting.remove 1 2 currency".to_string()
    }
}
