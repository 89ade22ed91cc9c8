//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes; anything else that reaches
//! `main` exits with the general failure code.

use std::fmt;

use subtrackr_core::LedgerError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (subscription, backup file)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },

    /// Backup file rejected on import
    InvalidBackup(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. } => write!(f, "{}", message),
            CliError::InvalidInput { message, .. } => write!(f, "{}", message),
            CliError::InvalidBackup(message) => write!(f, "Invalid backup: {}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    /// Hint to show under the error, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint),
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
            CliError::InvalidBackup(_) => {
                Some("A backup is the JSON array written by `subtrackr export`.")
            }
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
            CliError::InvalidBackup(_) => exit_codes::INVALID_BACKUP,
        }
    }
}

/// Exit code and hint for an error that reached `main`.
pub fn classify(err: &anyhow::Error) -> (i32, Option<String>) {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return (cli_err.exit_code(), cli_err.hint().map(String::from));
    }
    match err.downcast_ref::<LedgerError>() {
        Some(LedgerError::InvalidBackup(message)) => {
            let mapped = CliError::InvalidBackup(message.clone());
            (mapped.exit_code(), mapped.hint().map(String::from))
        }
        Some(LedgerError::Validation(_)) => (
            exit_codes::INVALID_INPUT,
            Some("Pass --name, --cost and --next-billing, or run without --no-input.".to_string()),
        ),
        Some(LedgerError::InvalidInput(_)) => (exit_codes::INVALID_INPUT, None),
        Some(LedgerError::Storage(_)) | None => (exit_codes::FAILURE, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::not_found("x", "y").exit_code(), 3);
        assert_eq!(CliError::invalid_input("x").exit_code(), 4);
        assert_eq!(CliError::InvalidBackup("x".into()).exit_code(), 5);
    }

    #[test]
    fn test_classify_ledger_errors() {
        let err = anyhow::Error::new(LedgerError::InvalidBackup("bad".into()));
        assert_eq!(classify(&err).0, exit_codes::INVALID_BACKUP);

        let err = anyhow::Error::new(LedgerError::Validation("name is required".into()));
        let (code, hint) = classify(&err);
        assert_eq!(code, exit_codes::INVALID_INPUT);
        assert!(hint.is_some());

        let err = anyhow::Error::new(LedgerError::Storage("disk".into()));
        assert_eq!(classify(&err).0, exit_codes::FAILURE);
    }

    #[test]
    fn test_classify_untyped_error() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(classify(&err), (exit_codes::FAILURE, None));
    }
}
