//! Domain layer: request context and content-key extraction.

pub mod content;
pub mod context;
pub mod error;
