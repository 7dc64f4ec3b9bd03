//! Local persistence for progression state.
//!
//! State is stored as independent key → JSON values, one per tracked field,
//! so each field can be loaded and saved on its own. The default store is a
//! single `SQLite` file:
//!
//! ```text
//! ~/.foodquest/progress.sqlite
//!   kv(key TEXT PRIMARY KEY, value TEXT NOT NULL)
//! ```

mod memory;
mod state;

use std::{fs, io, path::PathBuf};

use rusqlite::{Connection, OptionalExtension};
use serde_json::Value;

pub use memory::MemoryStore;
pub use state::{load_state, save_state};

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("corrupt store: {0}")]
    Corrupt(String),
}

pub type Result<T> = core::result::Result<T, StorageError>;

/// Key → JSON blob storage.
///
/// No transactional guarantee across keys is required: saving the same
/// value twice is harmless, and every key is independently loadable.
pub trait PersistentStore {
    /// Loads the value stored under `key`, or `None` if nothing is stored.
    fn load(&self, key: &str) -> Result<Option<Value>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &Value) -> Result<()>;
}

/// `SQLite`-backed store.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) the database at `path`.
    ///
    /// Parent directories are created if they don't exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Self::init(Connection::open(&path)?)
    }

    /// Opens a private in-memory database.
    pub fn in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    /// Returns the default database path: `~/.foodquest/progress.sqlite`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".foodquest").join("progress.sqlite"))
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                 key   TEXT PRIMARY KEY,
                 value TEXT NOT NULL
             )",
        )?;
        Ok(Self { conn })
    }
}

impl PersistentStore for SqliteStore {
    fn load(&self, key: &str) -> Result<Option<Value>> {
        let raw: Option<String> = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save(&mut self, key: &str, value: &Value) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            rusqlite::params![key, json],
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;
    use tempfile::TempDir;

    fn test_store() -> (TempDir, SqliteStore) {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(dir.path().join("nested").join("progress.sqlite")).unwrap();
        (dir, store)
    }

    #[test]
    fn load_missing_key_is_none() {
        let (_dir, store) = test_store();
        assert!(store.load("points").unwrap().is_none());
    }

    #[test]
    fn save_and_load() {
        let (_dir, mut store) = test_store();
        store.save("badges", &json!(["First Meal"])).unwrap();

        assert_eq!(store.load("badges").unwrap(), Some(json!(["First Meal"])));
    }

    #[test]
    fn save_overwrites() {
        let (_dir, mut store) = test_store();
        store.save("points", &json!(10)).unwrap();
        store.save("points", &json!(25)).unwrap();

        assert_eq!(store.load("points").unwrap(), Some(json!(25)));
    }

    #[test]
    fn values_survive_reopen() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("progress.sqlite");

        let mut store = SqliteStore::open(&path).unwrap();
        store.save("streak", &json!(4)).unwrap();
        drop(store);

        let store = SqliteStore::open(&path).unwrap();
        assert_eq!(store.load("streak").unwrap(), Some(json!(4)));
    }

    #[test]
    fn corrupt_value_is_a_json_error() {
        let (_dir, store) = test_store();
        store
            .conn
            .execute(
                "INSERT INTO kv (key, value) VALUES ('points', 'not json')",
                [],
            )
            .unwrap();

        let err = store.load("points").unwrap_err();
        assert!(matches!(err, StorageError::Json(_)));
    }
}
