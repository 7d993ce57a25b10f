//! # Resource Manager Subsystem (GN-STORE)
//!
//! Uniqueness-checked, id-indexed collections of management entities
//! backed by a pluggable persistent store.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): The `Entity` abstraction binding a type
//!   to its table, uniqueness key, and patch semantics.
//! - **Ports Layer** (`ports/`): The `EntityStore` outbound trait.
//! - **Adapters Layer** (`adapters/`): In-memory store; RocksDB store
//!   behind the `rocksdb` feature.
//! - **Service Layer** (`service.rs`): `ResourceManager<T>` with
//!   register/first/all/set/delete semantics and per-table serialization.
//!
//! ## Concurrency
//!
//! All mutations on one manager are mutually exclusive; reads may proceed
//! concurrently with other reads but never observe a partially-applied
//! write.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::memory::MemoryStore;
#[cfg(feature = "rocksdb")]
pub use adapters::rocks::RocksStore;
pub use domain::entity::Entity;
pub use ports::outbound::{EntityStore, StoreError};
pub use service::{ManagerError, ResourceManager, RoleManager, UserManager, WorkerManager};
