//! # Resource Manager Service
//!
//! `ResourceManager<T>` implements the transactional CRUD contract for one
//! entity table: `register` with uniqueness conflict detection, `first`
//! with not-found semantics, `all` in insertion order, `set` as partial
//! update, and `delete` with idempotent failure.
//!
//! ## Concurrency
//!
//! Every manager owns a table lock. Mutations take it exclusively so a
//! uniqueness check and the insert it guards are one atomic unit; reads
//! take it shared and never observe a half-applied write.

use crate::domain::entity::Entity;
use crate::ports::outbound::{EntityStore, StoreError};
use parking_lot::RwLock;
use shared_types::{
    DomainError, Role, User, Worker, WorkerFilters, WorkerStatus,
};
use std::marker::PhantomData;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

/// Failure of a manager operation: either an expected domain error or an
/// unexpected storage failure. The dispatch boundary keeps the two apart.
#[derive(Debug, Error)]
pub enum ManagerError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// The per-entity-type repository. Sole mutator of its table.
pub struct ResourceManager<T: Entity> {
    store: Arc<dyn EntityStore>,
    table_lock: RwLock<()>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> ResourceManager<T> {
    pub fn new(store: Arc<dyn EntityStore>) -> Self {
        Self {
            store,
            table_lock: RwLock::new(()),
            _entity: PhantomData,
        }
    }

    fn encode(entity: &T) -> Result<Vec<u8>, StoreError> {
        serde_json::to_vec(entity).map_err(|e| StoreError::Corrupted {
            table: T::TABLE.to_owned(),
            detail: e.to_string(),
        })
    }

    fn decode(bytes: &[u8]) -> Result<T, StoreError> {
        serde_json::from_slice(bytes).map_err(|e| StoreError::Corrupted {
            table: T::TABLE.to_owned(),
            detail: e.to_string(),
        })
    }

    fn scan_decoded(&self) -> Result<Vec<T>, StoreError> {
        self.store
            .scan(T::TABLE)?
            .iter()
            .map(|bytes| Self::decode(bytes))
            .collect()
    }

    /// Insert a new row. Fails with the table's conflict error when the
    /// uniqueness constraint (or the id itself) is already taken.
    pub fn register(&self, entity: T) -> Result<T, ManagerError> {
        let _guard = self.table_lock.write();

        if self.store.get(T::TABLE, entity.id())?.is_some() {
            return Err(T::conflict().into());
        }
        if let Some(key) = entity.unique_key() {
            let taken = self
                .scan_decoded()?
                .iter()
                .any(|row| row.unique_key().as_deref() == Some(key.as_str()));
            if taken {
                return Err(T::conflict().into());
            }
        }

        self.store
            .insert(T::TABLE, entity.id(), Self::encode(&entity)?)?;
        debug!(table = T::TABLE, id = %entity.id(), "registered entity");
        Ok(entity)
    }

    /// The unique row matching `predicate`, or the table's not-found error.
    ///
    /// Multiple matches are prevented by unique constraints, not tolerated:
    /// the first row in insertion order is returned.
    pub fn first<F>(&self, predicate: F) -> Result<T, ManagerError>
    where
        F: Fn(&T) -> bool,
    {
        let _guard = self.table_lock.read();
        self.scan_decoded()?
            .into_iter()
            .find(|row| predicate(row))
            .ok_or_else(|| T::not_found().into())
    }

    /// Fetch by primary key.
    pub fn first_by_id(&self, id: Uuid) -> Result<T, ManagerError> {
        let _guard = self.table_lock.read();
        match self.store.get(T::TABLE, id)? {
            Some(bytes) => Ok(Self::decode(&bytes)?),
            None => Err(T::not_found().into()),
        }
    }

    /// All rows in insertion order.
    pub fn all(&self) -> Result<Vec<T>, ManagerError> {
        let _guard = self.table_lock.read();
        Ok(self.scan_decoded()?)
    }

    /// All rows matching `predicate`, in insertion order. Filters combine
    /// with logical AND inside the predicate.
    pub fn all_where<F>(&self, predicate: F) -> Result<Vec<T>, ManagerError>
    where
        F: Fn(&T) -> bool,
    {
        let _guard = self.table_lock.read();
        Ok(self
            .scan_decoded()?
            .into_iter()
            .filter(|row| predicate(row))
            .collect())
    }

    /// Partial update: only the fields present in `patch` are modified.
    pub fn set(&self, id: Uuid, patch: &T::Patch) -> Result<T, ManagerError> {
        self.update_with(id, |entity| {
            entity.apply_patch(patch);
            Ok(())
        })
    }

    /// Read-modify-write under the table lock. `mutate` may reject the
    /// update with a domain error; nothing is written in that case.
    pub fn update_with<F>(&self, id: Uuid, mutate: F) -> Result<T, ManagerError>
    where
        F: FnOnce(&mut T) -> Result<(), DomainError>,
    {
        let _guard = self.table_lock.write();

        let bytes = self
            .store
            .get(T::TABLE, id)?
            .ok_or_else(T::not_found)?;
        let mut entity = Self::decode(&bytes)?;
        let key_before = entity.unique_key();

        mutate(&mut entity)?;

        // A mutation that moves the unique key must not collide with
        // another row.
        let key_after = entity.unique_key();
        if key_after != key_before {
            if let Some(key) = &key_after {
                let taken = self.scan_decoded()?.iter().any(|row| {
                    row.id() != id && row.unique_key().as_deref() == Some(key.as_str())
                });
                if taken {
                    return Err(T::conflict().into());
                }
            }
        }

        self.store
            .replace(T::TABLE, id, Self::encode(&entity)?)?;
        debug!(table = T::TABLE, %id, "updated entity");
        Ok(entity)
    }

    /// Remove a row. Deleting a missing id fails with not-found; a second
    /// delete of the same id fails the same way, never silently succeeds.
    pub fn delete(&self, id: Uuid) -> Result<(), ManagerError> {
        let _guard = self.table_lock.write();
        if self.store.remove(T::TABLE, id)? {
            debug!(table = T::TABLE, %id, "deleted entity");
            Ok(())
        } else {
            Err(T::not_found().into())
        }
    }
}

/// Manager of the role table.
pub type RoleManager = ResourceManager<Role>;

/// Manager of the user table.
pub type UserManager = ResourceManager<User>;

/// Manager of the worker table.
pub type WorkerManager = ResourceManager<Worker>;

impl ResourceManager<Role> {
    /// Lookup by unique role name.
    pub fn first_by_name(&self, name: &str) -> Result<Role, ManagerError> {
        self.first(|role| role.name == name)
    }
}

impl ResourceManager<User> {
    /// Lookup by the hex-encoded verify key, the signature-derived identity.
    pub fn first_by_verify_key(&self, verify_key: &str) -> Result<User, ManagerError> {
        self.first(|user| user.verify_key == verify_key)
    }
}

impl ResourceManager<Worker> {
    /// Listing with the query-style include flags applied.
    pub fn list(&self, filters: &WorkerFilters) -> Result<Vec<Worker>, ManagerError> {
        self.all_where(|worker| filters.admits(worker.status))
    }

    /// Atomic status transition. Fails with `InvalidRequest` when the
    /// worker is no longer in `expected`, so a crash or a concurrent
    /// teardown can never produce an inconsistent state.
    pub fn transition(
        &self,
        id: Uuid,
        expected: WorkerStatus,
        next: WorkerStatus,
        deployed_at: Option<u64>,
    ) -> Result<Worker, ManagerError> {
        self.update_with(id, |worker| {
            if worker.status != expected {
                return Err(DomainError::invalid(format!(
                    "worker status is {:?}, expected {:?}",
                    worker.status, expected
                )));
            }
            worker.status = next;
            if deployed_at.is_some() {
                worker.deployed_at = deployed_at;
            }
            Ok(())
        })
    }
}
