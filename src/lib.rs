//! Event indexer configuration and database bootstrap.
//!
//! Reads command-line flags (with environment fallbacks) into an immutable
//! [`models::Config`], which carries a deferred database connection factory.
//!
//! - `bootstrap`: Startup wiring used by the binary
//! - `models`: Configuration and mode types
//! - `services`: Database connection factory and pool
//! - `utils`: Logging and value parsing helpers

pub mod bootstrap;
pub mod models;
pub mod services;
pub mod utils;
