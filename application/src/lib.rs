//! Application layer for souk
//!
//! This crate contains the repository ports and the entity services. It
//! depends only on the domain layer.
//!
//! The two layers split absence handling deliberately: a repository signals
//! "no such record" with `Ok(None)` (or an empty collection) and reserves
//! its error type for storage faults, while the service wrapping it is the
//! single place where `None` becomes a typed `NotFound` failure. Neither
//! layer mixes the two policies.

pub mod ports;
pub mod services;

// Re-export commonly used types
pub use ports::{
    RepositoryError,
    profile_repository::ProfileRepository,
    proposal_repository::ProposalRepository,
    setting_repository::SettingRepository,
    vote_repository::VoteRepository,
};
pub use services::{
    profile_service::{ProfileService, ProfileServiceError},
    proposal_service::{ProposalService, ProposalServiceError},
    setting_service::{SettingService, SettingServiceError},
    vote_service::{VoteService, VoteServiceError},
};
