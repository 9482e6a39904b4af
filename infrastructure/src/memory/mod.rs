//! In-memory repository adapters
//!
//! `RwLock<HashMap>` stores with an atomic id sequence. Each repository
//! provides per-operation atomicity only; nothing spans two calls, matching
//! the persistence contract the services assume. Absence is `Ok(None)`,
//! never an error.

pub mod profiles;
pub mod proposals;
pub mod settings;
pub mod votes;
