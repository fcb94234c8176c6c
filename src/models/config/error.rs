//! Configuration error types.
//!
//! This module defines the error types that can occur while reading flags and
//! assembling the indexer configuration.

use log::error;
use std::{error::Error, fmt};

/// Errors that can occur during configuration operations
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum ConfigError {
	/// A flag value was read but does not describe a valid setting
	ValidationError(String),

	/// The flag source could not decode a value into the requested type
	ParseError(String),

	/// The flag source does not know the requested flag name
	MissingFlagError(String),
}

impl ConfigError {
	/// Format the error message for display
	fn format_message(&self) -> String {
		match self {
			Self::ValidationError(msg) => format!("Validation error: {}", msg),
			Self::ParseError(msg) => format!("Parse error: {}", msg),
			Self::MissingFlagError(msg) => format!("Missing flag: {}", msg),
		}
	}

	/// Create a new validation error and log it
	pub fn validation_error(msg: impl Into<String>) -> Self {
		let error = Self::ValidationError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Create a new parse error and log it
	pub fn parse_error(msg: impl Into<String>) -> Self {
		let error = Self::ParseError(msg.into());
		error!("{}", error.format_message());
		error
	}

	/// Create a new missing flag error and log it
	pub fn missing_flag_error(msg: impl Into<String>) -> Self {
		let error = Self::MissingFlagError(msg.into());
		error!("{}", error.format_message());
		error
	}
}

impl fmt::Display for ConfigError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.format_message())
	}
}

impl Error for ConfigError {}

impl From<clap::parser::MatchesError> for ConfigError {
	fn from(err: clap::parser::MatchesError) -> Self {
		match err {
			clap::parser::MatchesError::UnknownArgument { .. } => {
				Self::missing_flag_error(err.to_string())
			}
			_ => Self::parse_error(err.to_string()),
		}
	}
}
