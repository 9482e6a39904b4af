//! Entity services
//!
//! One service per entity, each the sole authority for that entity's
//! existence semantics. A service wraps its repository port, converts
//! `Ok(None)` into a typed `NotFound` at its own boundary, and orchestrates
//! CRUD. Repository faults pass through untouched. No retries, no
//! cross-call transactions at this layer.

pub mod profile_service;
pub mod proposal_service;
pub mod setting_service;
pub mod vote_service;
