//! # The `Entity` Abstraction
//!
//! Binds an entity type to its table name, id, optional uniqueness key,
//! patch semantics, and the domain errors its manager raises. The generic
//! `ResourceManager<T>` is written entirely against this trait.

use serde::de::DeserializeOwned;
use serde::Serialize;
use shared_types::{
    DomainError, Role, RolePatch, User, UserPatch, Worker, WorkerPatch,
};
use uuid::Uuid;

/// A row type managed by a `ResourceManager`.
pub trait Entity: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Table name in the backing store.
    const TABLE: &'static str;

    /// Partial-update type. Fields absent from a patch are left untouched.
    type Patch: Clone + Send + Sync;

    /// Primary key.
    fn id(&self) -> Uuid;

    /// Uniqueness constraint beyond the id, if any (e.g. role name).
    fn unique_key(&self) -> Option<String>;

    /// Apply the present fields of `patch` onto `self`.
    fn apply_patch(&mut self, patch: &Self::Patch);

    /// The not-found error for this table.
    fn not_found() -> DomainError;

    /// The uniqueness-conflict error for this table.
    fn conflict() -> DomainError;
}

impl Entity for Role {
    const TABLE: &'static str = "roles";
    type Patch = RolePatch;

    fn id(&self) -> Uuid {
        self.id
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn apply_patch(&mut self, patch: &RolePatch) {
        patch.apply(self);
    }

    fn not_found() -> DomainError {
        DomainError::RoleNotFound
    }

    fn conflict() -> DomainError {
        DomainError::RoleConflict
    }
}

impl Entity for User {
    const TABLE: &'static str = "users";
    type Patch = UserPatch;

    fn id(&self) -> Uuid {
        self.id
    }

    fn unique_key(&self) -> Option<String> {
        Some(self.verify_key.clone())
    }

    fn apply_patch(&mut self, patch: &UserPatch) {
        patch.apply(self);
    }

    fn not_found() -> DomainError {
        DomainError::UserNotFound
    }

    fn conflict() -> DomainError {
        DomainError::UserConflict
    }
}

impl Entity for Worker {
    const TABLE: &'static str = "workers";
    type Patch = WorkerPatch;

    fn id(&self) -> Uuid {
        self.id
    }

    fn unique_key(&self) -> Option<String> {
        None
    }

    fn apply_patch(&mut self, patch: &WorkerPatch) {
        patch.apply(self);
    }

    fn not_found() -> DomainError {
        DomainError::WorkerNotFound
    }

    fn conflict() -> DomainError {
        DomainError::WorkerConflict
    }
}
