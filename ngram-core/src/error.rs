//! Error types for n-gram extraction.
//!
//! Only non-positive lengths are a programming error. An input that is
//! too short for the requested window is a valid, empty result.

use thiserror::Error;

/// Result type alias for n-gram operations
pub type Result<T> = std::result::Result<T, NGramError>;

/// Main error type for the extraction library
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NGramError {
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),
}

impl NGramError {
	/// Check if this error comes from a malformed request (bad length)
	pub fn is_invalid_argument(&self) -> bool {
		matches!(self, NGramError::InvalidArgument(_))
	}
}
