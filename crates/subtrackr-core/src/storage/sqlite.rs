//! SQLite-backed key-value store.
//!
//! Values live in a single `kv` table. Each `set` is one upsert, so a crash
//! mid-write leaves either the old snapshot or the new one, never a mix.

use std::path::{Path, PathBuf};

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{LedgerError, Result};
use crate::storage::traits::KeyValueStore;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at TEXT NOT NULL
);
"#;

/// Key-value store kept in a SQLite database file.
pub struct SqliteStore {
    path: Option<PathBuf>,
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at `path`, creating parent directories
    /// as needed.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Storage` if the directory cannot be created or
    /// the file is not a usable SQLite database.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                LedgerError::Storage(format!(
                    "Failed to create data directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        let conn = Connection::open(path)?;
        conn.execute_batch(SCHEMA)?;
        tracing::debug!(path = %path.display(), "opened sqlite store");
        Ok(Self {
            path: Some(path.to_path_buf()),
            conn,
        })
    }

    /// Open a throwaway in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(Self { path: None, conn })
    }

    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// When `key` was last written (RFC 3339), if ever.
    pub fn updated_at(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .conn
            .query_row(
                "SELECT updated_at FROM kv WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?)
    }
}

impl KeyValueStore for SqliteStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_in_memory_round_trip() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        assert_eq!(store.get("subscriptions").unwrap(), None);
        store.set("subscriptions", "[]").unwrap();
        store.set("subscriptions", "[{\"id\":1}]").unwrap();
        assert_eq!(
            store.get("subscriptions").unwrap().as_deref(),
            Some("[{\"id\":1}]")
        );
        assert!(store.updated_at("subscriptions").unwrap().is_some());
        assert!(store.path().is_none());
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("subtrackr.db");

        let mut store = SqliteStore::open(&path).unwrap();
        store.set("subscriptions", "[1,2,3]").unwrap();
        drop(store);

        let reopened = SqliteStore::open(&path).unwrap();
        assert_eq!(reopened.get("subscriptions").unwrap().as_deref(), Some("[1,2,3]"));
        assert_eq!(reopened.path(), Some(path.as_path()));
    }

    #[test]
    fn test_open_rejects_non_database_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("not-a-db");
        std::fs::write(&path, "not sqlite ".repeat(512)).unwrap();
        assert!(SqliteStore::open(&path).is_err());
    }
}
