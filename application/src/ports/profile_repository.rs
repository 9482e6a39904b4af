//! Profile repository port

use crate::ports::RepositoryError;
use async_trait::async_trait;
use souk_domain::{Profile, ProfileId};

/// Persistence accessor for profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Look up a profile by surrogate id. Absence is `Ok(None)`.
    async fn find_one(&self, id: ProfileId) -> Result<Option<Profile>, RepositoryError>;

    /// All profiles, ordered by id.
    async fn find_all(&self) -> Result<Vec<Profile>, RepositoryError>;
}
