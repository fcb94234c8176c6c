//! Mock implementations of the indexer's seams.


pub use database::*;
pub use flags::*;
