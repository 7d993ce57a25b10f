//! # RocksDB Store Adapter
//!
//! Persistent backend behind the `rocksdb` feature.
//!
//! ## Key Layout
//!
//! Rows live under `t/{table}/{id}`; the value wraps the entity bytes with
//! a monotonically increasing sequence number so `scan` can return rows in
//! insertion order even though RocksDB iterates in key order.

use crate::ports::outbound::{EntityStore, StoreError};
use parking_lot::Mutex;
use rocksdb::{Direction, IteratorMode, DB};
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
struct StoredRow {
    seq: u64,
    data: serde_json::Value,
}

/// RocksDB-backed row storage.
pub struct RocksStore {
    db: DB,
    next_seq: Mutex<u64>,
}

impl RocksStore {
    /// Open (or create) the database at `path` and recover the sequence
    /// counter from the highest stored row.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let db = DB::open_default(path).map_err(|e| StoreError::Backend(e.to_string()))?;

        let mut max_seq = 0u64;
        for item in db.iterator(IteratorMode::Start) {
            let (_, value) = item.map_err(|e| StoreError::Backend(e.to_string()))?;
            if let Ok(row) = serde_json::from_slice::<StoredRow>(&value) {
                max_seq = max_seq.max(row.seq);
            }
        }

        Ok(Self {
            db,
            next_seq: Mutex::new(max_seq + 1),
        })
    }

    fn key(table: &str, id: Uuid) -> Vec<u8> {
        format!("t/{table}/{id}").into_bytes()
    }

    fn prefix(table: &str) -> Vec<u8> {
        format!("t/{table}/").into_bytes()
    }

    fn decode_row(table: &str, value: &[u8]) -> Result<StoredRow, StoreError> {
        serde_json::from_slice(value).map_err(|e| StoreError::Corrupted {
            table: table.to_owned(),
            detail: e.to_string(),
        })
    }

    fn entity_bytes(table: &str, row: &StoredRow) -> Result<Vec<u8>, StoreError> {
        serde_json::to_vec(&row.data).map_err(|e| StoreError::Corrupted {
            table: table.to_owned(),
            detail: e.to_string(),
        })
    }

    fn put_row(&self, table: &str, id: Uuid, seq: u64, bytes: &[u8]) -> Result<(), StoreError> {
        let data = serde_json::from_slice(bytes).map_err(|e| StoreError::Corrupted {
            table: table.to_owned(),
            detail: e.to_string(),
        })?;
        let row = StoredRow { seq, data };
        let value = serde_json::to_vec(&row).map_err(|e| StoreError::Backend(e.to_string()))?;
        self.db
            .put(Self::key(table, id), value)
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}

impl EntityStore for RocksStore {
    fn insert(&self, table: &str, id: Uuid, bytes: Vec<u8>) -> Result<(), StoreError> {
        let seq = {
            let mut next = self.next_seq.lock();
            let seq = *next;
            *next += 1;
            seq
        };
        self.put_row(table, id, seq, &bytes)
    }

    fn get(&self, table: &str, id: Uuid) -> Result<Option<Vec<u8>>, StoreError> {
        let value = self
            .db
            .get(Self::key(table, id))
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        match value {
            Some(value) => {
                let row = Self::decode_row(table, &value)?;
                Ok(Some(Self::entity_bytes(table, &row)?))
            }
            None => Ok(None),
        }
    }

    fn scan(&self, table: &str) -> Result<Vec<Vec<u8>>, StoreError> {
        let prefix = Self::prefix(table);
        let mut rows = Vec::new();
        for item in self
            .db
            .iterator(IteratorMode::From(&prefix, Direction::Forward))
        {
            let (key, value) = item.map_err(|e| StoreError::Backend(e.to_string()))?;
            if !key.starts_with(&prefix) {
                break;
            }
            let row = Self::decode_row(table, &value)?;
            let bytes = Self::entity_bytes(table, &row)?;
            rows.push((row.seq, bytes));
        }
        rows.sort_by_key(|(seq, _)| *seq);
        Ok(rows.into_iter().map(|(_, bytes)| bytes).collect())
    }

    fn replace(&self, table: &str, id: Uuid, bytes: Vec<u8>) -> Result<bool, StoreError> {
        let existing = self
            .db
            .get(Self::key(table, id))
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        let Some(value) = existing else {
            return Ok(false);
        };
        // Keep the original sequence number so listing order is stable.
        let row = Self::decode_row(table, &value)?;
        self.put_row(table, id, row.seq, &bytes)?;
        Ok(true)
    }

    fn remove(&self, table: &str, id: Uuid) -> Result<bool, StoreError> {
        let key = Self::key(table, id);
        let existed = self
            .db
            .get(&key)
            .map_err(|e| StoreError::Backend(e.to_string()))?
            .is_some();
        if existed {
            self.db
                .delete(&key)
                .map_err(|e| StoreError::Backend(e.to_string()))?;
        }
        Ok(existed)
    }
}
