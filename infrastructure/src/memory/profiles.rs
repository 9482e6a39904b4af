//! In-memory profile repository

use async_trait::async_trait;
use souk_application::RepositoryError;
use souk_application::ports::profile_repository::ProfileRepository;
use souk_domain::{Profile, ProfileId};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// Profile store backed by a `RwLock<HashMap>`.
#[derive(Default)]
pub struct InMemoryProfileRepository {
    profiles: RwLock<HashMap<ProfileId, Profile>>,
}

impl InMemoryProfileRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a profile under its own id, replacing any previous record.
    pub async fn insert(&self, profile: Profile) {
        self.profiles.write().await.insert(profile.id(), profile);
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfileRepository {
    async fn find_one(&self, id: ProfileId) -> Result<Option<Profile>, RepositoryError> {
        Ok(self.profiles.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Profile>, RepositoryError> {
        let mut profiles: Vec<_> = self.profiles.read().await.values().cloned().collect();
        profiles.sort_by_key(|p| p.id());
        Ok(profiles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use souk_domain::Address;

    #[tokio::test]
    async fn test_absence_is_none() {
        let repo = InMemoryProfileRepository::new();
        assert!(repo.find_one(ProfileId::new(1)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryProfileRepository::new();
        repo.insert(Profile::new(
            ProfileId::new(1),
            "alice",
            Address::try_new("PAbc123"),
        ))
        .await;

        let profile = repo.find_one(ProfileId::new(1)).await.unwrap().unwrap();
        assert_eq!(profile.name(), "alice");
    }

    #[tokio::test]
    async fn test_find_all_is_ordered_by_id() {
        let repo = InMemoryProfileRepository::new();
        repo.insert(Profile::new(ProfileId::new(2), "bob", None)).await;
        repo.insert(Profile::new(ProfileId::new(1), "alice", None)).await;

        let all = repo.find_all().await.unwrap();
        let ids: Vec<_> = all.iter().map(|p| p.id().value()).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
