//! SQLite-backed local storage with an in-memory cache.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use rusqlite::{Connection, params};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("could not create storage directory: {0}")]
    Io(#[from] std::io::Error),
}

/// Persistent `localStorage` for the page.
///
/// Every row is loaded into the cache on open, so reads never touch the
/// database. Writes go to the database first and reach the cache only once
/// they are committed.
pub struct SqliteStorage {
    conn: Connection,
    cache: HashMap<String, String>,
}

impl std::fmt::Debug for SqliteStorage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteStorage")
            .field("cached", &self.cache.len())
            .finish()
    }
}

impl SqliteStorage {
    /// Open (or create) the database at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Self::init(Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StorageError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StorageError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS local_storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            [],
        )?;

        let mut stmt = conn.prepare("SELECT key, value FROM local_storage")?;
        let cache = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<Result<HashMap<String, String>, _>>()?;
        drop(stmt);
        log::debug!("[storage] loaded {} item(s)", cache.len());

        Ok(Self { conn, cache })
    }
}

impl pagedom::Storage for SqliteStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, pagedom::StorageError> {
        Ok(self.cache.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), pagedom::StorageError> {
        self.conn
            .execute(
                "INSERT INTO local_storage (key, value) VALUES (?, ?)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                params![key, value],
            )
            .map_err(pagedom::StorageError::backend)?;

        self.cache.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), pagedom::StorageError> {
        self.conn
            .execute("DELETE FROM local_storage WHERE key = ?", [key])
            .map_err(pagedom::StorageError::backend)?;

        self.cache.remove(key);
        Ok(())
    }
}
