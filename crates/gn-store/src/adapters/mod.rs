//! Adapters layer: store backends implementing the `EntityStore` port.

pub mod memory;
#[cfg(feature = "rocksdb")]
pub mod rocks;
