//! Setting service
//!
//! CRUD orchestration for settings. All existence checks for settings live
//! here; callers never see a bare "null" from the repository.

use crate::ports::RepositoryError;
use crate::ports::setting_repository::SettingRepository;
use souk_domain::{
    MarketId, ProfileId, Setting, SettingCreateRequest, SettingId, SettingUpdateRequest,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Errors from setting operations.
#[derive(Error, Debug)]
pub enum SettingServiceError {
    #[error("Setting with the id={0} was not found")]
    NotFound(SettingId),

    #[error("Setting with the key={0} was not found")]
    NotFoundByKey(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// The single authority for setting existence and CRUD semantics.
pub struct SettingService {
    setting_repo: Arc<dyn SettingRepository>,
}

impl SettingService {
    pub fn new(setting_repo: Arc<dyn SettingRepository>) -> Self {
        Self { setting_repo }
    }

    pub async fn find_all(&self) -> Result<Vec<Setting>, SettingServiceError> {
        Ok(self.setting_repo.find_all().await?)
    }

    pub async fn find_all_by_profile_id(
        &self,
        profile_id: ProfileId,
        with_related: bool,
    ) -> Result<Vec<Setting>, SettingServiceError> {
        Ok(self
            .setting_repo
            .find_all_by_profile_id(profile_id, with_related)
            .await?)
    }

    pub async fn find_all_by_key(
        &self,
        key: &str,
        with_related: bool,
    ) -> Result<Vec<Setting>, SettingServiceError> {
        Ok(self.setting_repo.find_all_by_key(key, with_related).await?)
    }

    pub async fn find_all_by_key_and_profile_id(
        &self,
        key: &str,
        profile_id: ProfileId,
        with_related: bool,
    ) -> Result<Vec<Setting>, SettingServiceError> {
        Ok(self
            .setting_repo
            .find_all_by_key_and_profile_id(key, profile_id, with_related)
            .await?)
    }

    pub async fn find_all_by_profile_id_and_market_id(
        &self,
        profile_id: ProfileId,
        market_id: MarketId,
        with_related: bool,
    ) -> Result<Vec<Setting>, SettingServiceError> {
        Ok(self
            .setting_repo
            .find_all_by_profile_id_and_market_id(profile_id, market_id, with_related)
            .await?)
    }

    /// Strict finder by surrogate id.
    pub async fn find_one(
        &self,
        id: SettingId,
        with_related: bool,
    ) -> Result<Setting, SettingServiceError> {
        match self.setting_repo.find_one(id, with_related).await? {
            Some(setting) => Ok(setting),
            None => {
                warn!("Setting with the id={} was not found", id);
                Err(SettingServiceError::NotFound(id))
            }
        }
    }

    /// Strict finder by the `(key, profile, market)` natural key.
    pub async fn find_one_by_key_and_profile_id_and_market_id(
        &self,
        key: &str,
        profile_id: ProfileId,
        market_id: MarketId,
        with_related: bool,
    ) -> Result<Setting, SettingServiceError> {
        match self
            .setting_repo
            .find_one_by_key_and_profile_id_and_market_id(key, profile_id, market_id, with_related)
            .await?
        {
            Some(setting) => Ok(setting),
            None => {
                warn!("Setting with the key={} was not found", key);
                Err(SettingServiceError::NotFoundByKey(key.to_string()))
            }
        }
    }

    /// Create a setting and return the freshly stored record.
    ///
    /// The create call's own return shape is never trusted as the canonical
    /// result; the new id is round-tripped through [`Self::find_one`] for a
    /// consistent, fully-hydrated view.
    pub async fn create(
        &self,
        request: SettingCreateRequest,
    ) -> Result<Setting, SettingServiceError> {
        let setting = self.setting_repo.create(request).await?;
        self.find_one(setting.id(), true).await
    }

    /// Update a setting's mutable fields (`key`, `value`).
    ///
    /// Loads the existing record without related data, overwrites only the
    /// mutable fields, and persists the full merged record. Read-modify-write
    /// is not guarded against concurrent writers; last write wins.
    pub async fn update(
        &self,
        id: SettingId,
        request: SettingUpdateRequest,
    ) -> Result<Setting, SettingServiceError> {
        let mut setting = self.find_one(id, false).await?;
        setting.apply(request.key, request.value);
        Ok(self.setting_repo.update(id, setting).await?)
    }

    /// Delete by id. Deleting a nonexistent id is a documented no-op.
    pub async fn destroy(&self, id: SettingId) -> Result<(), SettingServiceError> {
        Ok(self.setting_repo.destroy(id).await?)
    }

    /// Delete the one setting matching the natural key.
    ///
    /// Resolves through the strict finder first, so a non-matching key fails
    /// `NotFound` rather than silently no-opping.
    pub async fn destroy_by_key_and_profile_id_and_market_id(
        &self,
        key: &str,
        profile_id: ProfileId,
        market_id: MarketId,
    ) -> Result<(), SettingServiceError> {
        let setting = self
            .find_one_by_key_and_profile_id_and_market_id(key, profile_id, market_id, true)
            .await?;
        self.destroy(setting.id()).await
    }
}
