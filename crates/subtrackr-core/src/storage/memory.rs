//! In-process key-value store.

use std::collections::HashMap;

use crate::error::Result;
use crate::storage::traits::KeyValueStore;

/// Key-value store backed by a `HashMap`. Nothing outlives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` already stored under `key`.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut store = Self::new();
        store.values.insert(key.into(), value.into());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get("subscriptions").unwrap(), None);
    }

    #[test]
    fn test_set_replaces_value() {
        let mut store = MemoryStore::with_value("subscriptions", "[]");
        store.set("subscriptions", "[{\"id\":1}]").unwrap();
        assert_eq!(
            store.get("subscriptions").unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );
    }
}
