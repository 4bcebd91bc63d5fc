//! Error types for leverage-lever

use thiserror::Error;

/// Main error type for leverage-lever
///
/// Only the storage layer produces these; validation reports problems as
/// data (`ValidationOutcome`) and the calculators assume validated input.
#[derive(Error, Debug)]
pub enum LeverError {
    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Result type alias for leverage-lever operations
pub type Result<T> = std::result::Result<T, LeverError>;
