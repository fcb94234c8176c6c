//! Flag vocabulary and flag sources.
//!
//! Every setting the indexer understands is registered here as a long flag with
//! an environment variable fallback. [`FlagSource`] is the read side: the
//! configuration builder only ever asks a source for values by name.

use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};

use crate::models::ConfigError;

pub const DATABASE_USERNAME: &str = "database-username";
pub const DATABASE_PASSWORD: &str = "database-password";
pub const DATABASE_NAME: &str = "database-name";
pub const DATABASE_HOST: &str = "database-host";
pub const DATABASE_MAX_IDLE_CONNS: &str = "database-max-idle-conns";
pub const DATABASE_MAX_OPEN_CONNS: &str = "database-max-open-conns";
pub const DATABASE_CONN_MAX_LIFETIME: &str = "database-conn-max-lifetime";
pub const HTTP_PORT: &str = "http-port";
pub const METRICS_HTTP_PORT: &str = "metrics-http-port";
pub const ETH_CLIENT_TIMEOUT: &str = "eth-client-timeout";
pub const L1_TAIKO_ADDRESS: &str = "l1-taiko-address";
pub const BRIDGE_ADDRESS: &str = "bridge-address";
pub const SWAP_ADDRESSES: &str = "swap-addresses";
pub const CORS_ORIGINS: &str = "cors-origins";
pub const BLOCK_BATCH_SIZE: &str = "block-batch-size";
pub const SUBSCRIPTION_BACKOFF: &str = "subscription-backoff";
pub const RPC_URL: &str = "rpc-url";
pub const WATCH_MODE: &str = "watch-mode";
pub const SYNC_MODE: &str = "sync-mode";
pub const INDEX_NFTS: &str = "index-nfts";
pub const INDEX_DOT_TAIKO: &str = "index-dot-taiko";
pub const LAYER: &str = "layer";
pub const LOG_LEVEL: &str = "log-level";

/// Read access to named flag values.
///
/// Lookups of a flag that was registered but not supplied return the zero value
/// of the type (`""`, `0`, `false`). Errors are reserved for names the source
/// does not know and values that cannot be read as the requested type.
pub trait FlagSource {
	fn string(&self, name: &str) -> Result<String, ConfigError>;

	fn uint64(&self, name: &str) -> Result<u64, ConfigError>;

	fn boolean(&self, name: &str) -> Result<bool, ConfigError>;
}

impl FlagSource for ArgMatches {
	fn string(&self, name: &str) -> Result<String, ConfigError> {
		Ok(self.try_get_one::<String>(name)?.cloned().unwrap_or_default())
	}

	fn uint64(&self, name: &str) -> Result<u64, ConfigError> {
		Ok(self.try_get_one::<u64>(name)?.copied().unwrap_or_default())
	}

	fn boolean(&self, name: &str) -> Result<bool, ConfigError> {
		Ok(self.try_get_one::<bool>(name)?.copied().unwrap_or_default())
	}
}

/// Builds the command line interface with every recognized flag registered.
pub fn command() -> Command {
	Command::new("eventindexer")
		.version(env!("CARGO_PKG_VERSION"))
		.about("Indexes contract events into a MySQL database.")
		// Database
		.arg(
			string_flag(DATABASE_USERNAME, "DATABASE_USER", "Database connection username")
				.required(true),
		)
		.arg(
			string_flag(DATABASE_PASSWORD, "DATABASE_PASSWORD", "Database connection password")
				.default_value(""),
		)
		.arg(string_flag(DATABASE_NAME, "DATABASE_NAME", "Database name").required(true))
		.arg(
			string_flag(DATABASE_HOST, "DATABASE_HOST", "Database host, with optional port")
				.required(true),
		)
		.arg(uint_flag(
			DATABASE_MAX_IDLE_CONNS,
			"DATABASE_MAX_IDLE_CONNS",
			"Maximum idle connections kept in the pool",
			"50",
		))
		.arg(uint_flag(
			DATABASE_MAX_OPEN_CONNS,
			"DATABASE_MAX_OPEN_CONNS",
			"Maximum open connections in the pool",
			"200",
		))
		.arg(uint_flag(
			DATABASE_CONN_MAX_LIFETIME,
			"DATABASE_CONN_MAX_LIFETIME",
			"Maximum lifetime of a pooled connection in seconds",
			"10",
		))
		// Servers
		.arg(uint_flag(HTTP_PORT, "HTTP_PORT", "Port for the HTTP API", "4102"))
		.arg(uint_flag(
			METRICS_HTTP_PORT,
			"METRICS_HTTP_PORT",
			"Port for the metrics server",
			"6061",
		))
		.arg(
			string_flag(
				CORS_ORIGINS,
				"HTTP_CORS_ORIGINS",
				"Comma-delimited list of allowed CORS origins",
			)
			.default_value("*"),
		)
		// Chain
		.arg(
			string_flag(RPC_URL, "RPC_URL", "RPC endpoint of the indexed chain").required(true),
		)
		.arg(uint_flag(
			ETH_CLIENT_TIMEOUT,
			"ETH_CLIENT_TIMEOUT",
			"Timeout for RPC client requests in seconds",
			"10",
		))
		.arg(
			string_flag(L1_TAIKO_ADDRESS, "L1_TAIKO_ADDRESS", "Address of the TaikoL1 contract")
				.default_value(""),
		)
		.arg(
			string_flag(BRIDGE_ADDRESS, "BRIDGE_ADDRESS", "Address of the bridge contract")
				.default_value(""),
		)
		.arg(
			string_flag(
				SWAP_ADDRESSES,
				"SWAP_ADDRESSES",
				"Comma-delimited list of swap contract addresses",
			)
			.default_value(""),
		)
		// Indexing
		.arg(uint_flag(
			BLOCK_BATCH_SIZE,
			"BLOCK_BATCH_SIZE",
			"Number of blocks processed per batch",
			"10",
		))
		.arg(uint_flag(
			SUBSCRIPTION_BACKOFF,
			"SUBSCRIPTION_BACKOFF_IN_SECONDS",
			"Backoff before resubscribing after an error, in seconds",
			"2",
		))
		.arg(
			string_flag(
				WATCH_MODE,
				"WATCH_MODE",
				"One of: filter, subscribe, filter-and-subscribe",
			)
			.default_value("filter"),
		)
		.arg(string_flag(SYNC_MODE, "SYNC_MODE", "One of: sync, resync").default_value("sync"))
		.arg(bool_flag(INDEX_NFTS, "INDEX_NFTS", "Index NFT transfer events"))
		.arg(bool_flag(
			INDEX_DOT_TAIKO,
			"INDEX_DOT_TAIKO",
			"Index .taiko name registrations",
		))
		.arg(
			string_flag(LAYER, "LAYER", "Layer the indexer runs against (l1 or l2)")
				.default_value("l1"),
		)
		// Logging
		.arg(
			string_flag(
				LOG_LEVEL,
				"LOG_LEVEL",
				"Set log level (trace, debug, info, warn, error)",
			)
			.value_name("LEVEL"),
		)
}

fn string_flag(name: &'static str, env: &'static str, help: &'static str) -> Arg {
	Arg::new(name)
		.long(name)
		.env(env)
		.help(help)
		.action(ArgAction::Set)
}

fn uint_flag(
	name: &'static str,
	env: &'static str,
	help: &'static str,
	default: &'static str,
) -> Arg {
	Arg::new(name)
		.long(name)
		.env(env)
		.help(help)
		.action(ArgAction::Set)
		.value_parser(value_parser!(u64))
		.default_value(default)
}

fn bool_flag(name: &'static str, env: &'static str, help: &'static str) -> Arg {
	Arg::new(name)
		.long(name)
		.env(env)
		.help(help)
		.action(ArgAction::SetTrue)
}
