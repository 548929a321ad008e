#[cfg(test)]
#[path = "../tests/unit/store_test.rs"]
mod store_test;

use milkrun_core::models::Address;
use rusqlite::{params, Connection};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// An error returned by `AddressStore` operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// An address label is empty or whitespace-only. User-correctable, nothing is persisted.
    #[error("address cannot be empty")]
    EmptyAddress,
    /// An underlying database failure. Surfaced as is, not retried, not recovered.
    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
}

/// A type alias for a result of a store operation.
pub type StoreResult<T> = Result<T, StoreError>;

/// A durable collection of addresses backed by SQLite. The store is the sole owner of record
/// lifetime: records are immutable once inserted and can only be deleted. Access to the single
/// connection is serialized behind a mutex, relying otherwise on the engine's own transaction
/// discipline.
#[derive(Clone)]
pub struct AddressStore {
    conn: Arc<Mutex<Connection>>,
}

impl AddressStore {
    /// Opens a store at the given database path, creating the schema when missing.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Self::new(Connection::open(path)?)
    }

    /// Opens an in-memory store, useful for testing.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::new(Connection::open_in_memory()?)
    }

    fn new(conn: Connection) -> StoreResult<Self> {
        // AUTOINCREMENT keeps id assignment atomic and monotonic: an id of a deleted record is
        // never assigned again.
        conn.execute(
            "CREATE TABLE IF NOT EXISTS addresses (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                address TEXT NOT NULL,
                latitude REAL NOT NULL,
                longitude REAL NOT NULL
            )",
            [],
        )?;

        Ok(Self { conn: Arc::new(Mutex::new(conn)) })
    }

    /// Adds a new address with its geocoded position and returns the assigned id. An empty or
    /// whitespace-only label is rejected before any durable write. Duplicate labels and
    /// positions are allowed.
    pub fn add(&self, address: &str, latitude: f64, longitude: f64) -> StoreResult<i64> {
        if address.trim().is_empty() {
            return Err(StoreError::EmptyAddress);
        }

        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO addresses (address, latitude, longitude) VALUES (?1, ?2, ?3)",
            params![address, latitude, longitude],
        )?;

        Ok(conn.last_insert_rowid())
    }

    /// Lists all stored addresses in insertion order.
    pub fn list_all(&self) -> StoreResult<Vec<Address>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare("SELECT id, address, latitude, longitude FROM addresses ORDER BY id")?;
        let addresses = stmt
            .query_map([], |row| {
                Ok(Address { id: row.get(0)?, address: row.get(1)?, latitude: row.get(2)?, longitude: row.get(3)? })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(addresses)
    }

    /// Deletes the address with the given id. Deleting an absent id is a no-op, not an error.
    pub fn delete_by_id(&self, id: i64) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM addresses WHERE id = ?1", params![id])?;

        Ok(())
    }

    /// Deletes all stored addresses unconditionally.
    pub fn clear_all(&self) -> StoreResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM addresses", [])?;

        Ok(())
    }
}
