//! Repository ports
//!
//! Pure persistence accessors, one per entity. Implementations (adapters)
//! live in the infrastructure layer.
//!
//! # Absence contract
//!
//! A repository never errors on "no such record": single-record finders
//! return `Ok(None)` and collection finders return an empty `Vec`. The
//! error type is reserved for storage faults (connectivity, constraint
//! violations), which pass upward unclassified.

pub mod profile_repository;
pub mod proposal_repository;
pub mod setting_repository;
pub mod vote_repository;

use thiserror::Error;

/// Opaque persistence-layer fault.
///
/// Services and commands forward these untouched; no classification or
/// recovery happens above the repository.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    Storage(String),
}
