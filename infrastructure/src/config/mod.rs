//! Configuration

pub mod file_config;
pub mod loader;

pub use file_config::{FileConfig, LoggingConfig, StorageConfig};
