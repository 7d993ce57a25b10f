//! # In-Memory Store Adapter
//!
//! The default backend: per-table vectors of `(id, bytes)` rows under a
//! read-write lock. Insertion order is the vector order.

use crate::ports::outbound::{EntityStore, StoreError};
use parking_lot::RwLock;
use std::collections::HashMap;
use uuid::Uuid;

/// Thread-safe in-memory row storage.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, Vec<(Uuid, Vec<u8>)>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntityStore for MemoryStore {
    fn insert(&self, table: &str, id: Uuid, bytes: Vec<u8>) -> Result<(), StoreError> {
        let mut tables = self.tables.write();
        tables.entry(table.to_owned()).or_default().push((id, bytes));
        Ok(())
    }

    fn get(&self, table: &str, id: Uuid) -> Result<Option<Vec<u8>>, StoreError> {
        let tables = self.tables.read();
        Ok(tables
            .get(table)
            .and_then(|rows| rows.iter().find(|(row_id, _)| *row_id == id))
            .map(|(_, bytes)| bytes.clone()))
    }

    fn scan(&self, table: &str) -> Result<Vec<Vec<u8>>, StoreError> {
        let tables = self.tables.read();
        Ok(tables
            .get(table)
            .map(|rows| rows.iter().map(|(_, bytes)| bytes.clone()).collect())
            .unwrap_or_default())
    }

    fn replace(&self, table: &str, id: Uuid, bytes: Vec<u8>) -> Result<bool, StoreError> {
        let mut tables = self.tables.write();
        let Some(rows) = tables.get_mut(table) else {
            return Ok(false);
        };
        match rows.iter_mut().find(|(row_id, _)| *row_id == id) {
            Some((_, slot)) => {
                *slot = bytes;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove(&self, table: &str, id: Uuid) -> Result<bool, StoreError> {
        let mut tables = self.tables.write();
        let Some(rows) = tables.get_mut(table) else {
            return Ok(false);
        };
        let before = rows.len();
        rows.retain(|(row_id, _)| *row_id != id);
        Ok(rows.len() != before)
    }
}
