//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (storage failures, unexpected errors)
/// - 2: Misuse of shell command (reserved by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Resource not found (subscription, backup file).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Backup file was rejected.
    pub const INVALID_BACKUP: i32 = 5;
}

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "SUBTRACKR_CONFIG";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "SUBTRACKR_LOG";
