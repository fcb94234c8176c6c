//! Indexing mode enumerations.
//!
//! Both modes are selected by flag value. The string forms below are the only
//! accepted spellings; anything else fails with a validation error.

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::models::ConfigError;

/// How the indexer treats already indexed history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SyncMode {
	/// Resume from the last indexed block
	#[default]
	Sync,
	/// Start over from the beginning of the chain
	Resync,
}

impl SyncMode {
	pub const ALL: [SyncMode; 2] = [SyncMode::Sync, SyncMode::Resync];

	pub fn as_str(&self) -> &'static str {
		match self {
			SyncMode::Sync => "sync",
			SyncMode::Resync => "resync",
		}
	}
}

impl fmt::Display for SyncMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SyncMode {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		SyncMode::ALL
			.into_iter()
			.find(|mode| mode.as_str() == s)
			.ok_or_else(|| {
				ConfigError::validation_error(format!(
					"invalid sync mode '{}', expected one of: {}",
					s,
					join_modes(SyncMode::ALL.iter().map(SyncMode::as_str))
				))
			})
	}
}

/// How the indexer learns about new blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WatchMode {
	/// Poll historical ranges with log filters
	#[default]
	Filter,
	/// Follow new heads over a subscription
	Subscribe,
	/// Catch up with filters, then switch to a subscription
	FilterAndSubscribe,
}

impl WatchMode {
	pub const ALL: [WatchMode; 3] = [
		WatchMode::Filter,
		WatchMode::Subscribe,
		WatchMode::FilterAndSubscribe,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			WatchMode::Filter => "filter",
			WatchMode::Subscribe => "subscribe",
			WatchMode::FilterAndSubscribe => "filter-and-subscribe",
		}
	}
}

impl fmt::Display for WatchMode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for WatchMode {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		WatchMode::ALL
			.into_iter()
			.find(|mode| mode.as_str() == s)
			.ok_or_else(|| {
				ConfigError::validation_error(format!(
					"invalid watch mode '{}', expected one of: {}",
					s,
					join_modes(WatchMode::ALL.iter().map(WatchMode::as_str))
				))
			})
	}
}

fn join_modes<'a>(modes: impl Iterator<Item = &'a str>) -> String {
	modes.collect::<Vec<_>>().join(", ")
}
