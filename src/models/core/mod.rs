//! Core domain types shared by the indexer's configuration and services.

mod mode;

pub use mode::{SyncMode, WatchMode};
