//! Vote aggregate

pub mod entities;
