//! Core services of the indexer.
//!
//! - `database`: Deferred database connection factory and pool abstraction

pub mod database;
