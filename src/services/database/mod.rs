//! Database access for the indexer.
//!
//! Provides the deferred connection factory stored in the configuration, the
//! dial strategies it delegates to, and the pool abstraction they return.

mod connection;
mod error;
mod opener;

pub use connection::{
	Db, DialStrategy, MysqlDialer, MysqlPool, MysqlPooledConnection, PoolLimits,
	DEFAULT_MAX_OPEN_CONNS,
};
pub use error::DatabaseError;
pub use opener::{ConnectionOpener, DbConnectionOpts};
