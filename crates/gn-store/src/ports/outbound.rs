//! # Outbound Ports (Driven Ports / Storage)
//!
//! The `EntityStore` trait is the seam between the resource managers and
//! the persistence backend. Adapters provide an in-memory implementation
//! and a RocksDB implementation behind the `rocksdb` feature.

use thiserror::Error;
use uuid::Uuid;

/// Failures of the backing store. These are unexpected from the caller's
/// point of view and are sanitized at the dispatch boundary.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backend rejected or failed the operation.
    #[error("storage backend error: {0}")]
    Backend(String),

    /// A stored row could not be decoded.
    #[error("corrupted row in table {table}: {detail}")]
    Corrupted { table: String, detail: String },
}

/// Raw row storage keyed by `(table, id)`.
///
/// Implementations must be thread-safe (`Send + Sync`) and must keep
/// `scan` in insertion order. Id-uniqueness within a table is guaranteed
/// by the calling manager, which serializes its mutations.
pub trait EntityStore: Send + Sync {
    /// Append a new row.
    fn insert(&self, table: &str, id: Uuid, bytes: Vec<u8>) -> Result<(), StoreError>;

    /// Fetch one row by id.
    fn get(&self, table: &str, id: Uuid) -> Result<Option<Vec<u8>>, StoreError>;

    /// All rows of a table in insertion order.
    fn scan(&self, table: &str) -> Result<Vec<Vec<u8>>, StoreError>;

    /// Overwrite an existing row in place, keeping its position.
    /// Returns `false` if the id is not present.
    fn replace(&self, table: &str, id: Uuid, bytes: Vec<u8>) -> Result<bool, StoreError>;

    /// Remove a row. Returns `false` if the id is not present.
    fn remove(&self, table: &str, id: Uuid) -> Result<bool, StoreError>;
}
