//! Domain layer for souk
//!
//! This crate contains the marketplace entities, value objects, and typed
//! identifiers. It has no dependencies on infrastructure or presentation
//! concerns.
//!
//! # Core Concepts
//!
//! ## Entities
//!
//! A `Profile` casts a `Vote` on a `Proposal`; a `Setting` is a key/value
//! pair optionally scoped to a profile and a market. Stored entities carry
//! a surrogate id assigned by the persistence layer plus created/updated
//! timestamps.
//!
//! ## Natural keys
//!
//! Beyond surrogate ids, lookups use business-meaningful keys: a proposal's
//! content `hash`, a vote's `(voter, proposal)` pair, and a setting's
//! `(key, profile, market)` triple.

pub mod core;
pub mod profile;
pub mod proposal;
pub mod setting;
pub mod vote;

// Re-export commonly used types
pub use core::ids::{MarketId, ProfileId, ProposalId, SettingId, VoteId};
pub use profile::{entities::Profile, value_objects::Address};
pub use proposal::{entities::Proposal, value_objects::ProposalHash};
pub use setting::{
    entities::Setting,
    requests::{SettingCreateRequest, SettingUpdateRequest},
};
pub use vote::entities::{Vote, VoteOutcome};
