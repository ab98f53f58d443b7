//! Key-value bridge between in-memory stores and durable storage.
//!
//! # Responsibility
//! - Provide load/save/remove over string keys with string values.
//! - Keep SQL details out of store code.
//!
//! # Invariants
//! - `save` unconditionally overwrites the previous value under a key.
//! - No transaction spans more than one key; each store owns exactly one
//!   key and writes independently.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BridgeResult<T> = Result<T, BridgeError>;

/// Transport error for bridge load/save operations.
#[derive(Debug)]
pub enum BridgeError {
    Db(DbError),
}

impl Display for BridgeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BridgeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for BridgeError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for BridgeError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous load/save boundary between store state and durable storage.
///
/// The contract mirrors the browser storage API the original app was built
/// on: string keys, string values, last write wins.
pub trait KvBridge {
    /// Returns the serialized value under `key`, if any.
    fn load(&self, key: &str) -> BridgeResult<Option<String>>;
    /// Overwrites the value under `key`.
    fn save(&self, key: &str, value: &str) -> BridgeResult<()>;
    /// Deletes the value under `key`. Absent keys are a no-op.
    fn remove(&self, key: &str) -> BridgeResult<()>;
}

/// SQLite-backed bridge over the `kv` table.
pub struct SqliteKvBridge<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvBridge<'conn> {
    /// Constructs a bridge from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KvBridge for SqliteKvBridge<'_> {
    fn load(&self, key: &str) -> BridgeResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn save(&self, key: &str, value: &str) -> BridgeResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> BridgeResult<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1;", [key])?;
        Ok(())
    }
}
