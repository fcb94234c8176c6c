//! Domain models and data structures for the event indexer.
//!
//! - `config`: Flag definitions and configuration assembly
//! - `core`: Indexing modes shared across the application

mod config;
mod core;

pub use config::{flags, Config, ConfigBuilder, ConfigError, FlagSource};
pub use core::{SyncMode, WatchMode};
