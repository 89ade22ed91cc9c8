//! # SubTrackr Core
//!
//! Core library for SubTrackr - a local-first tracker for recurring
//! subscription payments.
//!
//! This crate holds the subscription ledger engine independent of any
//! interface: the data model, spend totals, renewal scheduling, and the
//! backup format.
//!
//! ## Architecture
//!
//! - **storage**: Subscription records and the key-value persistence port
//! - **ledger**: The ledger store (add, remove, import, export)
//! - **dates**: Calendar-day parsing and arithmetic
//! - **totals**: Monthly/yearly spend and annual equivalents
//! - **renewals**: Upcoming renewals and due labels
//! - **backup**: Backup file encoding
//! - **ids**: Collision-free id allocation

pub mod backup;
pub mod dates;
pub mod error;
pub mod fs;
pub mod ids;
pub mod ledger;
pub mod renewals;
pub mod storage;
pub mod totals;

pub use error::{LedgerError, Result};
pub use ledger::LedgerStore;
pub use storage::{KeyValueStore, Subscription, SubscriptionId, SubscriptionInput};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
