//! Adapters layer: gateway implementations for the outbound ports.

pub mod infra;
