//! Event indexer entry point.
//!
//! # Flow
//! 1. Loads a `.env` file when present, so its values act as flag fallbacks
//! 2. Parses command-line flags and sets up logging
//! 3. Builds the configuration
//! 4. Opens the database once to verify it is reachable

use eventindexer::{
	bootstrap::{initialize_config, open_database},
	models::{flags, FlagSource},
	utils::logging::setup_logging,
};

use dotenvy::dotenv;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	// Load .env before parsing so env fallbacks see its values
	dotenv().ok();

	let matches = flags::command().get_matches();

	let log_level = matches.string(flags::LOG_LEVEL)?;
	setup_logging(Some(&log_level)).unwrap_or_else(|e| {
		eprintln!("Failed to setup logging: {}", e);
	});

	let config = initialize_config(&matches, None)
		.map_err(|e| anyhow::anyhow!("Failed to build configuration: {}", e))?;

	let db = open_database(&config).await.map_err(|e| {
		error!("Database check failed: {}", e);
		anyhow::anyhow!("Failed to open database: {}", e)
	})?;

	info!(?db, "Indexer configuration ready");

	Ok(())
}
