//! Deferred database connection factory.
//!
//! A [`ConnectionOpener`] captures everything needed to reach the database when
//! the configuration is built, and dials only when [`ConnectionOpener::open`] is
//! called. Every call dials again; callers that need a single shared pool should
//! open once and share the resulting [`Db`].

use std::{fmt, sync::Arc};
use tracing::{debug, instrument};
use urlencoding::encode;

use crate::services::database::{DatabaseError, Db, DialStrategy, MysqlDialer, PoolLimits};

/// Characters that would end the authority part of the URL
const HOST_RESERVED: &[char] = &['/', '?', '#', '@'];

/// Plain connection parameters captured at configuration time
#[derive(Clone, Default, PartialEq, Eq)]
pub struct DbConnectionOpts {
	pub username: String,
	pub password: String,
	pub database: String,
	pub host: String,
	pub max_idle_conns: u64,
	pub max_open_conns: u64,
	/// Seconds
	pub max_conn_lifetime: u64,
}

impl DbConnectionOpts {
	/// Builds the MySQL connection URL.
	///
	/// Credentials and the database name are percent-encoded, and the password
	/// segment is left out when the password is empty. The host is used as given
	/// and may carry a port.
	pub fn dsn(&self) -> String {
		if self.password.is_empty() {
			format!(
				"mysql://{}@{}/{}",
				encode(&self.username),
				self.host,
				encode(&self.database)
			)
		} else {
			format!(
				"mysql://{}:{}@{}/{}",
				encode(&self.username),
				encode(&self.password),
				self.host,
				encode(&self.database)
			)
		}
	}

	pub fn pool_limits(&self) -> PoolLimits {
		PoolLimits {
			max_idle_conns: self.max_idle_conns,
			max_open_conns: self.max_open_conns,
			max_conn_lifetime: self.max_conn_lifetime,
		}
	}

	fn validate(&self) -> Result<(), DatabaseError> {
		let missing: Vec<&str> = [
			("username", &self.username),
			("host", &self.host),
			("database", &self.database),
		]
		.into_iter()
		.filter(|(_, value)| value.is_empty())
		.map(|(name, _)| name)
		.collect();

		if !missing.is_empty() {
			return Err(DatabaseError::Config(format!(
				"missing {}",
				missing.join(", ")
			)));
		}

		if let Some(c) = self.host.chars().find(|c| HOST_RESERVED.contains(c)) {
			return Err(DatabaseError::Config(format!(
				"host '{}' contains reserved character '{}'",
				self.host, c
			)));
		}

		Ok(())
	}
}

impl fmt::Debug for DbConnectionOpts {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("DbConnectionOpts")
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.field("database", &self.database)
			.field("host", &self.host)
			.field("max_idle_conns", &self.max_idle_conns)
			.field("max_open_conns", &self.max_open_conns)
			.field("max_conn_lifetime", &self.max_conn_lifetime)
			.finish()
	}
}

/// Opens database pools from captured options through a pluggable dialer.
#[derive(Clone)]
pub struct ConnectionOpener {
	opts: DbConnectionOpts,
	dialer: Arc<dyn DialStrategy>,
}

impl ConnectionOpener {
	pub fn new(opts: DbConnectionOpts, dialer: Arc<dyn DialStrategy>) -> Self {
		Self { opts, dialer }
	}

	/// Opener backed by [`MysqlDialer`]
	pub fn mysql(opts: DbConnectionOpts) -> Self {
		Self::new(opts, Arc::new(MysqlDialer))
	}

	pub fn opts(&self) -> &DbConnectionOpts {
		&self.opts
	}

	/// Dials a new pool.
	///
	/// Fails with [`DatabaseError::Config`] before dialing if the username, host
	/// or database name is empty. Dial failures are returned as-is, without retry.
	#[instrument(skip_all, fields(host = %self.opts.host, database = %self.opts.database))]
	pub async fn open(&self) -> Result<Db, DatabaseError> {
		self.opts.validate()?;

		let db = self
			.dialer
			.dial(&self.opts.dsn(), self.opts.pool_limits())
			.await?;
		debug!(?db, "database pool opened");

		Ok(db)
	}
}

impl fmt::Debug for ConnectionOpener {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ConnectionOpener")
			.field("opts", &self.opts)
			.finish_non_exhaustive()
	}
}
