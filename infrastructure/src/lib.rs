//! Infrastructure layer for souk
//!
//! Adapters behind the application layer's ports: in-memory repositories,
//! the seed-file loader, and configuration. The SQL-backed repositories the
//! production deployment uses live behind the same ports in a separate
//! crate; only the contract matters here.

pub mod config;
pub mod memory;
pub mod seed;

// Re-export commonly used types
pub use config::{FileConfig, loader::ConfigLoader};
pub use memory::{
    profiles::InMemoryProfileRepository, proposals::InMemoryProposalRepository,
    settings::InMemorySettingRepository, votes::InMemoryVoteRepository,
};
pub use seed::{SeedError, SeedFile};
