//! Utility modules for common functionality.
//!
//! - logging: Tracing subscriber setup
//! - parsing: Delimited list and address decoding for flag values

pub mod logging;
pub mod parsing;
