//! Bootstrap helpers for the indexer binary.
//!
//! Turns parsed flags into a [`Config`] and performs the startup database check.
//! Both steps accept injected collaborators so they can run without MySQL.

use std::{error::Error, sync::Arc};
use tracing::{info, instrument};

use crate::{
	models::{Config, ConfigBuilder, FlagSource},
	services::database::{Db, DialStrategy},
};

/// Type alias for bootstrap results
pub type Result<T> = std::result::Result<T, Box<dyn Error + Send + Sync>>;

/// Builds the configuration from a flag source.
///
/// When `dialer` is `None` the configuration opens MySQL through the default
/// dialer. A summary of the result is logged with the password left out.
///
/// # Errors
/// Returns an error if any flag cannot be read or a mode is unknown
#[instrument(skip_all)]
pub fn initialize_config<F: FlagSource + ?Sized>(
	source: &F,
	dialer: Option<Arc<dyn DialStrategy>>,
) -> Result<Config> {
	let builder = match dialer {
		Some(dialer) => ConfigBuilder::new().with_dialer(dialer),
		None => ConfigBuilder::new(),
	};
	let config = builder.build(source)?;

	info!(
		database_host = %config.database_host,
		database_name = %config.database_name,
		rpc_url = %config.rpc_url,
		layer = %config.layer,
		sync_mode = %config.sync_mode,
		watch_mode = %config.watch_mode,
		swap_addresses = config.swap_addresses.len(),
		index_nfts = config.index_nfts,
		index_dot_taiko = config.index_dot_taiko,
		"Configuration loaded"
	);

	Ok(config)
}

/// Opens the database once through the configured opener and reports the pool.
///
/// # Errors
/// Returns the dial error unchanged, boxed
#[instrument(skip_all)]
pub async fn open_database(config: &Config) -> Result<Db> {
	let db = config.open_db.open().await?;
	let (connections, idle_connections) = db.pool_state();

	info!(
		max_size = db.max_size(),
		connections, idle_connections, "Database connection established"
	);

	Ok(db)
}
