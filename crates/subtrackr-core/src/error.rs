//! Error types for SubTrackr core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for SubTrackr operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Core error type for ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A subscription could not be created from the given input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backup content was rejected; the ledger was left untouched
    #[error("Invalid backup: {0}")]
    InvalidBackup(String),

    /// Key-value backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl LedgerError {
    /// Whether this error came from a rejected backup import.
    pub fn is_invalid_backup(&self) -> bool {
        matches!(self, LedgerError::InvalidBackup(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<rusqlite::Error> for LedgerError {
    fn from(err: rusqlite::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}
