//! Indexer configuration.
//!
//! [`ConfigBuilder`] reads every recognized flag from a [`FlagSource`] and
//! assembles a [`Config`]. Building performs no I/O: the database is reached only
//! when the [`ConnectionOpener`] stored in the configuration is invoked.
//!
//! Address flags are decoded leniently. A value that is not a well-formed
//! 20-byte hex address still yields an address (the zero address, or a padded
//! one for short input), and a warning naming the flag is logged.

use alloy::primitives::Address;
use std::{fmt, sync::Arc};
use tracing::{debug, warn};

use crate::{
	models::{SyncMode, WatchMode},
	services::database::{ConnectionOpener, DbConnectionOpts, DialStrategy, MysqlDialer},
	utils::parsing::{
		hex_to_address, is_address, parse_address_list, parse_string_list, LIST_DELIMITER,
	},
};

mod error;
pub mod flags;

pub use error::ConfigError;
pub use flags::FlagSource;

/// Runtime configuration of the indexer.
///
/// Built once at startup and never mutated afterwards. Equality compares every
/// setting but ignores the connection opener.
#[derive(Clone)]
pub struct Config {
	// Database
	pub database_username: String,
	pub database_password: String,
	pub database_name: String,
	pub database_host: String,
	pub database_max_idle_conns: u64,
	pub database_max_open_conns: u64,
	pub database_max_conn_lifetime: u64,

	// Network
	pub rpc_url: String,
	pub http_port: u64,
	pub metrics_http_port: u64,
	pub eth_client_timeout: u64,

	// Monitored contracts
	pub l1_taiko_address: Address,
	pub bridge_address: Address,
	pub swap_addresses: Vec<Address>,

	// Features
	pub index_dot_taiko: bool,
	pub index_nfts: bool,
	pub cors_origins: Vec<String>,

	// Indexing
	pub block_batch_size: u64,
	pub subscription_backoff: u64,
	pub sync_mode: SyncMode,
	pub watch_mode: WatchMode,
	pub layer: String,

	/// Opens the database described by the `database_*` settings
	pub open_db: ConnectionOpener,
}

impl Config {
	/// Builds a configuration backed by the MySQL dialer.
	pub fn from_flags<F: FlagSource + ?Sized>(source: &F) -> Result<Self, ConfigError> {
		ConfigBuilder::new().build(source)
	}
}

impl PartialEq for Config {
	fn eq(&self, other: &Self) -> bool {
		self.database_username == other.database_username
			&& self.database_password == other.database_password
			&& self.database_name == other.database_name
			&& self.database_host == other.database_host
			&& self.database_max_idle_conns == other.database_max_idle_conns
			&& self.database_max_open_conns == other.database_max_open_conns
			&& self.database_max_conn_lifetime == other.database_max_conn_lifetime
			&& self.rpc_url == other.rpc_url
			&& self.http_port == other.http_port
			&& self.metrics_http_port == other.metrics_http_port
			&& self.eth_client_timeout == other.eth_client_timeout
			&& self.l1_taiko_address == other.l1_taiko_address
			&& self.bridge_address == other.bridge_address
			&& self.swap_addresses == other.swap_addresses
			&& self.index_dot_taiko == other.index_dot_taiko
			&& self.index_nfts == other.index_nfts
			&& self.cors_origins == other.cors_origins
			&& self.block_batch_size == other.block_batch_size
			&& self.subscription_backoff == other.subscription_backoff
			&& self.sync_mode == other.sync_mode
			&& self.watch_mode == other.watch_mode
			&& self.layer == other.layer
	}
}

impl Eq for Config {}

impl fmt::Debug for Config {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Config")
			.field("database_username", &self.database_username)
			.field("database_password", &"<redacted>")
			.field("database_name", &self.database_name)
			.field("database_host", &self.database_host)
			.field("database_max_idle_conns", &self.database_max_idle_conns)
			.field("database_max_open_conns", &self.database_max_open_conns)
			.field("database_max_conn_lifetime", &self.database_max_conn_lifetime)
			.field("rpc_url", &self.rpc_url)
			.field("http_port", &self.http_port)
			.field("metrics_http_port", &self.metrics_http_port)
			.field("eth_client_timeout", &self.eth_client_timeout)
			.field("l1_taiko_address", &self.l1_taiko_address)
			.field("bridge_address", &self.bridge_address)
			.field("swap_addresses", &self.swap_addresses)
			.field("index_dot_taiko", &self.index_dot_taiko)
			.field("index_nfts", &self.index_nfts)
			.field("cors_origins", &self.cors_origins)
			.field("block_batch_size", &self.block_batch_size)
			.field("subscription_backoff", &self.subscription_backoff)
			.field("sync_mode", &self.sync_mode)
			.field("watch_mode", &self.watch_mode)
			.field("layer", &self.layer)
			.finish_non_exhaustive()
	}
}

/// Assembles a [`Config`] from a [`FlagSource`].
#[derive(Clone)]
pub struct ConfigBuilder {
	dialer: Arc<dyn DialStrategy>,
}

impl Default for ConfigBuilder {
	fn default() -> Self {
		Self {
			dialer: Arc::new(MysqlDialer),
		}
	}
}

impl ConfigBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the dial strategy bound into the built connection opener.
	pub fn with_dialer(mut self, dialer: Arc<dyn DialStrategy>) -> Self {
		self.dialer = dialer;
		self
	}

	/// Reads every recognized flag and assembles the configuration.
	///
	/// # Errors
	/// Fails when the flag source cannot produce a value, or when `sync-mode` or
	/// `watch-mode` is not one of the known modes.
	pub fn build<F: FlagSource + ?Sized>(&self, source: &F) -> Result<Config, ConfigError> {
		let swap_addresses_value = source.string(flags::SWAP_ADDRESSES)?;
		warn_malformed_list(flags::SWAP_ADDRESSES, &swap_addresses_value);
		let swap_addresses = parse_address_list(&swap_addresses_value);

		let cors_origins = parse_string_list(&source.string(flags::CORS_ORIGINS)?);

		let l1_taiko_address = read_address(source, flags::L1_TAIKO_ADDRESS)?;
		let bridge_address = read_address(source, flags::BRIDGE_ADDRESS)?;

		let sync_mode: SyncMode = source.string(flags::SYNC_MODE)?.parse()?;
		let watch_mode: WatchMode = source.string(flags::WATCH_MODE)?.parse()?;

		let db_opts = DbConnectionOpts {
			username: source.string(flags::DATABASE_USERNAME)?,
			password: source.string(flags::DATABASE_PASSWORD)?,
			database: source.string(flags::DATABASE_NAME)?,
			host: source.string(flags::DATABASE_HOST)?,
			max_idle_conns: source.uint64(flags::DATABASE_MAX_IDLE_CONNS)?,
			max_open_conns: source.uint64(flags::DATABASE_MAX_OPEN_CONNS)?,
			max_conn_lifetime: source.uint64(flags::DATABASE_CONN_MAX_LIFETIME)?,
		};

		let config = Config {
			database_username: db_opts.username.clone(),
			database_password: db_opts.password.clone(),
			database_name: db_opts.database.clone(),
			database_host: db_opts.host.clone(),
			database_max_idle_conns: db_opts.max_idle_conns,
			database_max_open_conns: db_opts.max_open_conns,
			database_max_conn_lifetime: db_opts.max_conn_lifetime,
			rpc_url: source.string(flags::RPC_URL)?,
			http_port: source.uint64(flags::HTTP_PORT)?,
			metrics_http_port: source.uint64(flags::METRICS_HTTP_PORT)?,
			eth_client_timeout: source.uint64(flags::ETH_CLIENT_TIMEOUT)?,
			l1_taiko_address,
			bridge_address,
			swap_addresses,
			index_dot_taiko: source.boolean(flags::INDEX_DOT_TAIKO)?,
			index_nfts: source.boolean(flags::INDEX_NFTS)?,
			cors_origins,
			block_batch_size: source.uint64(flags::BLOCK_BATCH_SIZE)?,
			subscription_backoff: source.uint64(flags::SUBSCRIPTION_BACKOFF)?,
			sync_mode,
			watch_mode,
			layer: source.string(flags::LAYER)?,
			open_db: ConnectionOpener::new(db_opts, self.dialer.clone()),
		};

		debug!(
			swap_addresses = config.swap_addresses.len(),
			cors_origins = config.cors_origins.len(),
			"configuration assembled"
		);

		Ok(config)
	}
}

fn read_address<F: FlagSource + ?Sized>(
	source: &F,
	name: &str,
) -> Result<Address, ConfigError> {
	let value = source.string(name)?;
	if !value.is_empty() && !is_address(&value) {
		warn_coerced(name, &value);
	}
	Ok(hex_to_address(&value))
}

/// Logs every non-empty segment the lenient decoder will coerce.
fn warn_malformed_list(flag: &str, value: &str) {
	for segment in value.split(LIST_DELIMITER) {
		if !segment.is_empty() && !is_address(segment) {
			warn_coerced(flag, segment);
		}
	}
}

fn warn_coerced(flag: &str, segment: &str) {
	warn!(
		flag,
		segment,
		decoded = %hex_to_address(segment),
		"malformed address coerced"
	);
}
