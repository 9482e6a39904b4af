//! Concrete RPC commands
//!
//! Every command follows the same shape: run the gate, consume positional
//! parameters left-to-right, resolve each to a domain identifier via its
//! owning service (each step short-circuits with its own named reason),
//! then perform exactly one terminal business operation.

pub mod setting_get;
pub mod setting_list;
pub mod setting_remove;
pub mod setting_set;
pub mod vote_get;

use crate::rpc::command::{CommandError, NotFoundKind};
use souk_application::{ProfileService, ProfileServiceError};
use souk_domain::{Profile, ProfileId};

/// Shared first resolution step: profile by id.
///
/// Absence becomes `NotFound(profile, id)`; repository faults pass through.
pub(crate) async fn resolve_profile(
    profiles: &ProfileService,
    profile_id: ProfileId,
) -> Result<Profile, CommandError> {
    match profiles.find_one(profile_id).await {
        Ok(profile) => Ok(profile),
        Err(ProfileServiceError::NotFound(id)) => {
            Err(CommandError::not_found(NotFoundKind::Profile, id.to_string()))
        }
        Err(ProfileServiceError::Repository(e)) => Err(e.into()),
    }
}
