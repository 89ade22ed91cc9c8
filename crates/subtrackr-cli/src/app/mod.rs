//! Application-level utilities for the SubTrackr CLI.
//!
//! This module provides:
//! - Path resolution for config and ledger files
//! - The per-invocation context handed to every command

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
pub use resolver::{resolve_config_path, resolve_ledger_path, resolve_subscription_id};
