//! # GridNode Runtime Library
//!
//! Exposes the runtime modules for integration testing. The binary entry
//! point lives in `main.rs`.

pub mod bootstrap;
pub mod config;
pub mod runtime;

pub use bootstrap::ensure_owner;
pub use config::{ConfigError, NodeConfig};
pub use runtime::{NodeRuntime, RuntimeError};
