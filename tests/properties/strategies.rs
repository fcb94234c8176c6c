use alloy::primitives::Address;
use eventindexer::{models::WatchMode, services::database::PoolLimits};
use proptest::prelude::*;

const MAX_ADDRESSES: usize = 10;
const MAX_ORIGINS: usize = 5;

pub fn address_strategy() -> impl Strategy<Value = Address> {
	any::<[u8; 20]>().prop_map(Address::from)
}

pub fn address_list_strategy() -> impl Strategy<Value = Vec<Address>> {
	prop::collection::vec(address_strategy(), 1..MAX_ADDRESSES)
}

pub fn origin_strategy() -> impl Strategy<Value = String> {
	"https?://[a-z]{1,12}\\.(com|org|io)(:[0-9]{2,5})?".prop_map(|s| s.to_string())
}

pub fn origin_list_strategy() -> impl Strategy<Value = Vec<String>> {
	prop::collection::vec(origin_strategy(), 1..MAX_ORIGINS)
}

pub fn watch_mode_strategy() -> impl Strategy<Value = WatchMode> {
	prop::sample::select(WatchMode::ALL.to_vec())
}

pub fn pool_limits_strategy() -> impl Strategy<Value = PoolLimits> {
	(any::<u64>(), any::<u64>(), any::<u64>()).prop_map(
		|(max_idle_conns, max_open_conns, max_conn_lifetime)| PoolLimits {
			max_idle_conns,
			max_open_conns,
			max_conn_lifetime,
		},
	)
}

/// Settings fed to the configuration builder
#[derive(Debug, Clone)]
pub struct FlagInput {
	pub username: String,
	pub host: String,
	pub http_port: u64,
	pub max_open_conns: u64,
	pub swap_addresses: Vec<Address>,
	pub cors_origins: Vec<String>,
	pub watch_mode: WatchMode,
	pub index_nfts: bool,
}

pub fn flag_input_strategy() -> impl Strategy<Value = FlagInput> {
	(
		"[a-z_]{1,16}",
		"[a-z]{1,10}(:[0-9]{4})?",
		1u64..65535,
		0u64..1000,
		address_list_strategy(),
		origin_list_strategy(),
		watch_mode_strategy(),
		any::<bool>(),
	)
		.prop_map(
			|(
				username,
				host,
				http_port,
				max_open_conns,
				swap_addresses,
				cors_origins,
				watch_mode,
				index_nfts,
			)| FlagInput {
				username,
				host,
				http_port,
				max_open_conns,
				swap_addresses,
				cors_origins,
				watch_mode,
				index_nfts,
			},
		)
}
