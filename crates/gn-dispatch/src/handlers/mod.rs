//! Handlers layer: one function per message type, grouped by entity.
//!
//! Every handler receives the node context, the resolved acting user, and
//! the request content, and returns a [`shared_types::NodeResponse`] or a
//! [`crate::DispatchError`] for the boundary to sanitize. Authorization
//! failures happen before any mutation; denied requests have no side
//! effects.

pub mod roles;
pub mod users;
pub mod workers;
