//! Shared domain primitives

pub mod ids;
