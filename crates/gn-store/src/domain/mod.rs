//! Domain layer: the `Entity` abstraction and its implementations for the
//! node's management tables.

pub mod entity;
