//! Two-scope key/value storage backing sessions and preferences.
//!
//! The console was designed around the browser storage model: a durable
//! scope that survives restarts and an ephemeral scope that ends with the
//! browsing context. Here the durable scope is a file-backed SQLite
//! database (WAL mode) and the ephemeral scope is an in-memory SQLite
//! connection that vanishes when dropped. Both scopes share one key
//! namespace so a session can be written to either side under identical
//! key names.

use anyhow::Result;
use parking_lot::Mutex;
use std::path::Path;

/// Storage key names, prefixed to avoid collision with unrelated data.
pub mod keys {
    /// Access token for the current session.
    pub const AUTH_TOKEN: &str = "hakim_auth_token";
    /// Long-lived refresh token.
    pub const REFRESH_TOKEN: &str = "hakim_refresh_token";
    /// Serialized user record cached from the backend.
    pub const USER_DATA: &str = "hakim_user_data";
    /// Remember-me flag from the login form.
    pub const REMEMBER_ME: &str = "hakim_remember_me";
    /// Selected language code.
    pub const LANGUAGE: &str = "hakim_language";
}

/// A single storage scope: a flat string-to-string table.
///
/// Write failures (disk full, closed database) propagate to the caller;
/// there is no retry or fallback at this layer.
pub struct StorageScope {
    conn: Mutex<rusqlite::Connection>,
}

impl StorageScope {
    /// Open (or create) a durable scope at the given path.
    pub fn open(db_path: &Path) -> Result<Self> {
        let conn = rusqlite::Connection::open(db_path)?;
        conn.execute_batch("PRAGMA journal_mode = WAL; PRAGMA busy_timeout = 5000;")?;
        Self::init_tables(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Create an ephemeral scope. Contents are lost when the scope drops,
    /// which models the end of a browsing context.
    pub fn in_memory() -> Result<Self> {
        let conn = rusqlite::Connection::open_in_memory()?;
        Self::init_tables(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_tables(conn: &rusqlite::Connection) -> Result<()> {
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Read a value. `Ok(None)` when the key is absent.
    pub fn get(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock();
        let row = conn.query_row(
            "SELECT value FROM kv WHERE key = ?1",
            rusqlite::params![key],
            |row| row.get(0),
        );
        match row {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Write a value, replacing any previous one.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute(
            "INSERT OR REPLACE INTO kv (key, value) VALUES (?1, ?2)",
            rusqlite::params![key, value],
        )?;
        Ok(())
    }

    /// Remove a key. Removing an absent key is not an error.
    pub fn remove(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock();
        conn.execute("DELETE FROM kv WHERE key = ?1", rusqlite::params![key])?;
        Ok(())
    }
}
