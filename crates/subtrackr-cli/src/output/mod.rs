//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying subscriptions
//! in various formats (JSON, table, plain text).

mod json;
mod text;

// Re-export public API
pub use json::{subscription_json, subscriptions_json, totals_json};
pub use text::{due_cell, subscription_columns, subscription_rows, upcoming_columns, upcoming_rows};
