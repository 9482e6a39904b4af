//! `setting.get`: fetch the one setting under a natural key.

use crate::rpc::command::{CommandError, NotFoundKind, RpcCommand};
use crate::rpc::commands::resolve_profile;
use crate::rpc::gate::{self, ParamSpec};
use crate::rpc::params::RpcParams;
use async_trait::async_trait;
use souk_application::{ProfileService, SettingService, SettingServiceError};
use souk_domain::{MarketId, ProfileId};
use std::sync::Arc;

const USAGE: &str = "<profileId> <marketId> <settingKey>";

/// Resolves `[profileId, marketId, key]` and returns the one setting under
/// the `(key, profile, market)` natural key.
///
/// The market id is a validated scope, not a resolved entity.
pub struct SettingGetCommand {
    setting_service: Arc<SettingService>,
    profile_service: Arc<ProfileService>,
}

impl SettingGetCommand {
    pub fn new(setting_service: Arc<SettingService>, profile_service: Arc<ProfileService>) -> Self {
        Self {
            setting_service,
            profile_service,
        }
    }
}

#[async_trait]
impl RpcCommand for SettingGetCommand {
    fn name(&self) -> &'static str {
        "setting.get"
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

        let setting = match self
            .setting_service
            .find_one_by_key_and_profile_id_and_market_id(&key, profile.id(), market_id, true)
            .await
        {
            Ok(setting) => setting,
            Err(SettingServiceError::NotFoundByKey(key)) => {
                return Err(CommandError::not_found(NotFoundKind::Setting, key));
            }
            Err(SettingServiceError::NotFound(id)) => {
                return Err(CommandError::not_found(NotFoundKind::Setting, id.to_string()));
            }
            Err(SettingServiceError::Repository(e)) => return Err(e.into()),
        };
        Ok(serde_json::to_value(setting)?)
    }

    fn description(&self) -> String {
        "Get a setting scoped to a profile and market.".to_string()
    }

    fn example(&self) -> String {
        "setting.get 1 2 currency".to_string()
    }
}
