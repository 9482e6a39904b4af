//! In-memory setting repository

use async_trait::async_trait;
use souk_application::RepositoryError;
use souk_application::ports::setting_repository::SettingRepository;
use souk_domain::{MarketId, ProfileId, Setting, SettingCreateRequest, SettingId};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// Setting store with an atomic id sequence.
///
/// `with_related` is accepted on every finder and ignored: there is nothing
/// to join in memory, and the flag never changes which records match.
pub struct InMemorySettingRepository {
    settings: RwLock<HashMap<SettingId, Setting>>,
    next_id: AtomicU64,
}

impl InMemorySettingRepository {
    pub fn new() -> Self {
        Self {
            settings: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    async fn collect<F>(&self, predicate: F) -> Vec<Setting>
    where
        F: Fn(&Setting) -> bool,
    {
        let mut settings: Vec<_> = self
            .settings
            .read()
            .await
            .values()
            .filter(|s| predicate(s))
            .cloned()
            .collect();
        settings.sort_by_key(|s| s.id());
        settings
    }
}

#[async_trait]
impl SettingRepository for InMemorySettingRepository {
    async fn find_one(
        &self,
        id: SettingId,
        _with_related: bool,
    ) -> Result<Option<Setting>, RepositoryError> {
        Ok(self.settings.read().await.get(&id).cloned())
    }

    async fn find_one_by_key_and_profile_id_and_market_id(
        &self,
        key: &str,
        profile_id: ProfileId,
        market_id: MarketId,
        _with_related: bool,
    ) -> Result<Option<Setting>, RepositoryError> {
        Ok(self
            .settings
            .read()
            .await
            .values()
            .find(|s| {
                s.key() == key
                    && s.profile_id() == Some(profile_id)
                    && s.market_id() == Some(market_id)
            })
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Setting>, RepositoryError> {
        Ok(self.collect(|_| true).await)
    }

    async fn find_all_by_profile_id(
        &self,
        profile_id: ProfileId,
        _with_related: bool,
    ) -> Result<Vec<Setting>, RepositoryError> {
        Ok(self.collect(|s| s.profile_id() == Some(profile_id)).await)
    }

    async fn find_all_by_key(
        &self,
        key: &str,
        _with_related: bool,
    ) -> Result<Vec<Setting>, RepositoryError> {
        Ok(self.collect(|s| s.key() == key).await)
    }

    async fn find_all_by_key_and_profile_id(
        &self,
        key: &str,
        profile_id: ProfileId,
        _with_related: bool,
    ) -> Result<Vec<Setting>, RepositoryError> {
        Ok(self
            .collect(|s| s.key() == key && s.profile_id() == Some(profile_id))
            .await)
    }

    async fn find_all_by_profile_id_and_market_id(
        &self,
        profile_id: ProfileId,
        market_id: MarketId,
        _with_related: bool,
    ) -> Result<Vec<Setting>, RepositoryError> {
        Ok(self
            .collect(|s| s.profile_id() == Some(profile_id) && s.market_id() == Some(market_id))
            .await)
    }

    async fn create(&self, request: SettingCreateRequest) -> Result<Setting, RepositoryError> {
        let id = SettingId::new(self.next_id.fetch_add(1, Ordering::SeqCst));
        let setting = Setting::new(
            id,
            request.key,
            request.value,
            request.profile_id,
            request.market_id,
        );
        self.settings.write().await.insert(id, setting.clone());
        Ok(setting)
    }

    async fn update(&self, id: SettingId, setting: Setting) -> Result<Setting, RepositoryError> {
        let mut settings = self.settings.write().await;
        if !settings.contains_key(&id) {
            return Err(RepositoryError::Storage(format!(
                "update of missing row id={id}"
            )));
        }
        settings.insert(id, setting.clone());
        Ok(setting)
    }

    async fn destroy(&self, id: SettingId) -> Result<(), RepositoryError> {
        // Deleting an id that does not exist is a no-op
        self.settings.write().await.remove(&id);
        Ok(())
    }
}
