//! Setting repository port

use crate::ports::RepositoryError;
use async_trait::async_trait;
use souk_domain::{MarketId, ProfileId, Setting, SettingCreateRequest, SettingId};

/// Persistence accessor for settings.
///
/// `with_related` controls eager loading of the owning profile/market rows
/// in joined backends; it never changes which records match. Adapters with
/// nothing to join accept and ignore it.
#[async_trait]
pub trait SettingRepository: Send + Sync {
    /// Look up a setting by surrogate id. Absence is `Ok(None)`.
    async fn find_one(
        &self,
        id: SettingId,
        with_related: bool,
    ) -> Result<Option<Setting>, RepositoryError>;

    /// The one setting matching the `(key, profile, market)` natural key.
    async fn find_one_by_key_and_profile_id_and_market_id(
        &self,
        key: &str,
        profile_id: ProfileId,
        market_id: MarketId,
        with_related: bool,
    ) -> Result<Option<Setting>, RepositoryError>;

    /// All settings, ordered by id.
    async fn find_all(&self) -> Result<Vec<Setting>, RepositoryError>;

    async fn find_all_by_profile_id(
        &self,
        profile_id: ProfileId,
        with_related: bool,
    ) -> Result<Vec<Setting>, RepositoryError>;

    async fn find_all_by_key(
        &self,
        key: &str,
        with_related: bool,
    ) -> Result<Vec<Setting>, RepositoryError>;

    async fn find_all_by_key_and_profile_id(
        &self,
        key: &str,
        profile_id: ProfileId,
        with_related: bool,
    ) -> Result<Vec<Setting>, RepositoryError>;

    async fn find_all_by_profile_id_and_market_id(
        &self,
        profile_id: ProfileId,
        market_id: MarketId,
        with_related: bool,
    ) -> Result<Vec<Setting>, RepositoryError>;

    /// Persist a new setting, assigning its id, and return the stored row.
    async fn create(&self, request: SettingCreateRequest) -> Result<Setting, RepositoryError>;

    /// Overwrite the stored row with `setting`, returning the stored result.
    async fn update(&self, id: SettingId, setting: Setting) -> Result<Setting, RepositoryError>;

    /// Delete by id. Deleting an id that does not exist is a no-op.
    async fn destroy(&self, id: SettingId) -> Result<(), RepositoryError>;
}
