//! Setting aggregate

pub mod entities;
pub mod requests;
