//! Shared error types for the library

use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for fixture-calc operations
#[derive(Debug, Error)]
pub enum Error {
    /// A list segment that is not a base-10 integer
    #[error("Invalid number {segment:?} at position {position}")]
    InvalidNumber {
        /// Index among the non-empty segments of the input
        position: usize,
        segment: String,
        #[source]
        source: ParseIntError,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Configuration file that is not valid TOML for our schema
    #[error("Failed to parse {}: {source}", .path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;
