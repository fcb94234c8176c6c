//! Database error types.

use thiserror::Error;

/// Errors that can occur while opening or using the database pool
#[derive(Debug, Error)]
pub enum DatabaseError {
	/// The captured connection options cannot describe a database
	#[error("Invalid connection options: {0}")]
	Config(String),

	/// The pool could not be built or the database did not answer
	#[error("Connection error: {0}")]
	Connection(String),

	/// A connection could not be checked out of the pool
	#[error("Pool error: {0}")]
	Pool(String),
}
