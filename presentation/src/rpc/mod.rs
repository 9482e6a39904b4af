//! RPC command surface
//!
//! Commands consume an ordered parameter list, resolve each parameter to a
//! domain identifier via its owning service (failing fast with a specific,
//! named reason per resolution step), then perform exactly one terminal
//! business operation with the fully resolved identifiers.

pub mod command;
pub mod commands;
pub mod dispatcher;
pub mod gate;
pub mod params;
