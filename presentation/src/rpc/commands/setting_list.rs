//! `setting.list`: list all settings owned by a profile.

use crate::rpc::command::{CommandError, NotFoundKind, RpcCommand};
use crate::rpc::commands::resolve_profile;
use crate::rpc::gate::{self, ParamSpec};
use crate::rpc::params::RpcParams;
use async_trait::async_trait;
use souk_application::{ProfileService, SettingService, SettingServiceError};
use souk_domain::ProfileId;
use std::sync::Arc;

const USAGE: &str = "<profileId>";

/// Resolves `[profileId]` and returns every setting scoped to that profile.
///
/// An empty list is a valid answer.
pub struct SettingListCommand {
    setting_service: Arc<SettingService>,
    profile_service: Arc<ProfileService>,
}

impl SettingListCommand {
    pub fn new(setting_service: Arc<SettingService>, profile_service: Arc<ProfileService>) -> Self {
        Self {
            setting_service,
            profile_service,
        }
    }
}

#[async_trait]
impl RpcCommand for SettingListCommand {
    fn name(&self) -> &'static str {
        "setting.list"
    }

    fn spec(&self) -> ParamSpec {
        ParamSpec::new(1, USAGE)
    }

    async fn execute(&self, mut params: RpcParams) -> Result<serde_json::Value, CommandError> {
        gate::enforce(&self.spec(), &params)?;

        let profile_id = ProfileId::new(params.take_u64(USAGE)?);
        let profile = resolve_profile(&self.profile_service, profile_id).await?;

        let settings = self
            .setting_service
            .find_all_by_profile_id(profile.id(), true)
            .await
            .map_err(|e| match e {
                SettingServiceError::Repository(e) => CommandError::from(e),
                other => CommandError::not_found(NotFoundKind::Setting, other.to_string()),
            })?;
        Ok(serde_json::to_value(settings)?)
    }

    fn description(&self) -> String {
        "List all settings belonging to a profile.".to_string()
    }

    fn example(&self) -> String {
        "setting.list 1".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rpc::commands::setting_set::tests::{fixture, seed_setting};
    use serde_json::json;

    #[tokio::test]
    async fn test_list_returns_profile_settings() {
        let fx = fixture();
        seed_setting(&fx, "currency", "PART", 1, 2).await;
        seed_setting(&fx, "language", "en", 1, 2).await;
        seed_setting(&fx, "currency", "BTC", 7, 2).await;
        let command =
            SettingListCommand::new(fx.setting_service.clone(), fx.profile_service.clone());

        let result = command
            .execute(RpcParams::new([json!("1")]))
            .await
            .unwrap();
        assert_eq!(result.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_list_empty_is_a_valid_answer() {
        let fx = fixture();
        let command =
            SettingListCommand::new(fx.setting_service.clone(), fx.profile_service.clone());

        let result = command
            .execute(RpcParams::new([json!(1)]))
            .await
            .unwrap();
        assert_eq!(result, json!([]));
    }

    #[tokio::test]
    async fn test_list_no_params_is_malformed() {
        let fx = fixture();
        let command =
            SettingListCommand::new(fx.setting_service.clone(), fx.profile_service.clone());

        let err = command.execute(RpcParams::default()).await.unwrap_err();
        assert!(matches!(err, CommandError::MalformedRequest { .. }));
    }
}
