//! Persistence port.
//!
//! The ledger is persisted as one opaque string under one key. Any backend
//! that can get and set a string by key can hold it, which keeps the ledger
//! engine independent of where the bytes end up.

use crate::error::Result;

/// Key under which the serialized ledger is stored.
pub const SUBSCRIPTIONS_KEY: &str = "subscriptions";

/// Minimal key-value store used to persist the ledger snapshot.
///
/// Implementations must ensure:
/// - `set` replaces any previous value for the key as a whole
/// - `get` returns exactly the last value written, or `None`
pub trait KeyValueStore {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` if nothing has been stored under `key` yet.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the backend cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set(SUBSCRIPTIONS_KEY, "[]").unwrap();
        assert_eq!(store.get(SUBSCRIPTIONS_KEY).unwrap().as_deref(), Some("[]"));
    }
}
