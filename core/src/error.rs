//! Error types for the wififilter-core library.

use thiserror::Error;

/// Result type alias for wififilter operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading reports, persisting state or loading configuration.
///
/// External command failures are normally reported as error-marked output
/// strings (see [`crate::domain::is_error_output`]); this type only
/// carries them when an operation needs a structured result.
#[derive(Error, Debug)]
pub enum Error {
    /// An external command reported a failure.
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    /// The allowed-list file could not be read or written.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
