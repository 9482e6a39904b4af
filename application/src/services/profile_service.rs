//! Profile service

use crate::ports::RepositoryError;
use crate::ports::profile_repository::ProfileRepository;
use souk_domain::{Profile, ProfileId};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Errors from profile lookups.
#[derive(Error, Debug)]
pub enum ProfileServiceError {
    #[error("Profile with the id={0} was not found")]
    NotFound(ProfileId),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Read-side authority for profile existence.
pub struct ProfileService {
    profile_repo: Arc<dyn ProfileRepository>,
}

impl ProfileService {
    pub fn new(profile_repo: Arc<dyn ProfileRepository>) -> Self {
        Self { profile_repo }
    }

    /// Strict finder: absence becomes [`ProfileServiceError::NotFound`].
    pub async fn find_one(&self, id: ProfileId) -> Result<Profile, ProfileServiceError> {
        match self.profile_repo.find_one(id).await? {
            Some(profile) => Ok(profile),
            None => {
                warn!("Profile with the id={} was not found", id);
                Err(ProfileServiceError::NotFound(id))
            }
        }
    }

    pub async fn find_all(&self) -> Result<Vec<Profile>, ProfileServiceError> {
        Ok(self.profile_repo.find_all().await?)
    }
}
