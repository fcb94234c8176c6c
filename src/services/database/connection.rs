//! MySQL connection pool and the dial strategies that produce it.
//!
//! A [`Db`] wraps a `bb8` pool of `diesel-async` MySQL connections and exposes
//! two views of it: the raw pool, and a checked-out diesel connection for
//! query-DSL use. A [`DialStrategy`] turns a DSN plus [`PoolLimits`] into a
//! [`Db`]; [`MysqlDialer`] is the production strategy.

use async_trait::async_trait;
use diesel_async::{
	pooled_connection::{bb8, AsyncDieselConnectionManager},
	AsyncMysqlConnection, RunQueryDsl,
};
use std::{fmt, time::Duration};
use tracing::debug;

use crate::services::database::DatabaseError;

/// Raw pool handle
pub type MysqlPool = bb8::Pool<AsyncMysqlConnection>;

/// Connection checked out of a [`MysqlPool`]
pub type MysqlPooledConnection<'a> = bb8::PooledConnection<'a, AsyncMysqlConnection>;

/// Pool size used when no open-connection limit is configured
pub const DEFAULT_MAX_OPEN_CONNS: u32 = 10;

/// Limits applied to the pool when it is built.
///
/// A value of `0` leaves the corresponding limit at the pool default: a
/// size of [`DEFAULT_MAX_OPEN_CONNS`] and no lifetime bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolLimits {
	/// Ceiling on idle connections.
	///
	/// `bb8` has no idle ceiling. The pool opens no connection ahead of demand
	/// and reaps idle ones after its idle timeout.
	pub max_idle_conns: u64,
	/// Upper bound on open connections
	pub max_open_conns: u64,
	/// Maximum lifetime of a connection, in seconds
	pub max_conn_lifetime: u64,
}

impl PoolLimits {
	/// Pool size, saturating at `u32::MAX`
	pub fn max_size(&self) -> u32 {
		match self.max_open_conns {
			0 => DEFAULT_MAX_OPEN_CONNS,
			n => u32::try_from(n).unwrap_or(u32::MAX),
		}
	}

	/// Idle connections the pool may hold, never more than [`PoolLimits::max_size`]
	pub fn idle_limit(&self) -> u32 {
		match self.max_idle_conns {
			0 => self.max_size(),
			n => u32::try_from(n).unwrap_or(u32::MAX).min(self.max_size()),
		}
	}

	pub fn max_lifetime(&self) -> Option<Duration> {
		match self.max_conn_lifetime {
			0 => None,
			secs => Some(Duration::from_secs(secs)),
		}
	}
}

/// An open database pool.
#[derive(Clone)]
pub struct Db {
	pool: MysqlPool,
	max_size: u32,
}

impl Db {
	/// Builds the pool and verifies the database answers.
	pub async fn connect(dsn: &str, limits: PoolLimits) -> Result<Self, DatabaseError> {
		let db = Self::build(dsn, limits).await?;
		db.ping().await?;

		Ok(db)
	}

	/// Builds the pool without warm connections, so nothing is dialed yet.
	async fn build(dsn: &str, limits: PoolLimits) -> Result<Self, DatabaseError> {
		let manager = AsyncDieselConnectionManager::<AsyncMysqlConnection>::new(dsn);

		let pool = bb8::Pool::builder()
			.max_size(limits.max_size())
			.min_idle(None)
			.max_lifetime(limits.max_lifetime())
			.build(manager)
			.await
			.map_err(|e| {
				DatabaseError::Connection(format!("Failed to create connection pool: {}", e))
			})?;

		Ok(Self {
			pool,
			max_size: limits.max_size(),
		})
	}

	/// Builds the pool without opening any connection.
	///
	/// No warm connections are requested; the first [`Db::orm`] call dials.
	/// Must be called from within a Tokio runtime.
	pub fn connect_lazy(dsn: &str, limits: PoolLimits) -> Self {
		let manager = AsyncDieselConnectionManager::<AsyncMysqlConnection>::new(dsn);

		let pool = bb8::Pool::builder()
			.max_size(limits.max_size())
			.max_lifetime(limits.max_lifetime())
			.build_unchecked(manager);

		Self {
			pool,
			max_size: limits.max_size(),
		}
	}

	/// Raw pool handle
	pub fn pool(&self) -> &MysqlPool {
		&self.pool
	}

	/// Checks out a diesel connection for query-DSL use.
	pub async fn orm(&self) -> Result<MysqlPooledConnection<'_>, DatabaseError> {
		self.pool
			.get()
			.await
			.map_err(|e| DatabaseError::Pool(e.to_string()))
	}

	/// Runs `SELECT 1` on a pooled connection.
	pub async fn ping(&self) -> Result<(), DatabaseError> {
		let mut conn = self.orm().await?;

		diesel::sql_query("SELECT 1")
			.execute(&mut *conn)
			.await
			.map_err(|e| DatabaseError::Connection(format!("Connection test failed: {}", e)))?;

		Ok(())
	}

	/// Returns `(connections, idle_connections)`
	pub fn pool_state(&self) -> (u32, u32) {
		let state = self.pool.state();
		(state.connections, state.idle_connections)
	}

	/// Upper bound on open connections the pool was built with
	pub fn max_size(&self) -> u32 {
		self.max_size
	}
}

impl fmt::Debug for Db {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let (connections, idle_connections) = self.pool_state();
		f.debug_struct("Db")
			.field("max_size", &self.max_size())
			.field("connections", &connections)
			.field("idle_connections", &idle_connections)
			.finish()
	}
}

/// Turns a connection string into an open [`Db`].
#[async_trait]
pub trait DialStrategy: Send + Sync {
	async fn dial(&self, dsn: &str, limits: PoolLimits) -> Result<Db, DatabaseError>;
}

/// Dials MySQL through `diesel-async` and verifies the connection.
#[derive(Debug, Clone, Copy, Default)]
pub struct MysqlDialer;

#[async_trait]
impl DialStrategy for MysqlDialer {
	async fn dial(&self, dsn: &str, limits: PoolLimits) -> Result<Db, DatabaseError> {
		debug!(
			max_size = limits.max_size(),
			idle_limit = limits.idle_limit(),
			max_lifetime = ?limits.max_lifetime(),
			"dialing mysql"
		);
		Db::connect(dsn, limits).await
	}
}
