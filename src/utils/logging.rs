//! Logging setup for the indexer.
//!
//! Installs a global `tracing_subscriber` registry with a compact formatter.
//! The filter comes from `RUST_LOG` when set, otherwise from the level passed
//! in (normally the `log-level` flag), otherwise `info`.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Level used when neither `RUST_LOG` nor a level is given
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Sets up logging to stdout.
pub fn setup_logging(
	level: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	setup_logging_with_writer(level, std::io::stdout)
}

/// Sets up logging to a custom writer.
pub fn setup_logging_with_writer<W>(
	level: Option<&str>,
	writer: W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	tracing_subscriber::registry()
		.with(build_filter(level))
		.with(
			fmt::layer()
				.with_writer(writer)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.with_ansi(true)
						.compact(),
				)
				.fmt_fields(fmt::format::PrettyFields::new()),
		)
		.try_init()?;
	Ok(())
}

/// Resolves the filter directive.
///
/// An empty or unparsable level falls back to [`DEFAULT_LOG_LEVEL`].
pub fn build_filter(level: Option<&str>) -> EnvFilter {
	if let Ok(filter) = EnvFilter::try_from_default_env() {
		return filter;
	}

	level
		.map(str::trim)
		.filter(|level| !level.is_empty())
		.and_then(|level| EnvFilter::try_new(level).ok())
		.unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL))
}
