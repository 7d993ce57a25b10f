//! Ports layer: outbound trait for the backing store.

pub mod outbound;
