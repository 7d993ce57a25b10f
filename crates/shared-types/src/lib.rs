//! # Shared Types Crate
//!
//! This crate contains the domain entities (Role, User, Worker), the
//! `SignedEnvelope` message wrapper, the closed `MessageType` tag set, and
//! the domain error taxonomy with its status-code mapping.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All cross-subsystem types are defined here.
//! - **Closed Message Set**: `MessageType` is an enum; an unknown tag fails
//!   at deserialization, never inside the router.
//! - **Envelope Authority**: The envelope's `signer` field is the sole
//!   source of signature-derived identity.

pub mod entities;
pub mod envelope;
pub mod errors;
pub mod response;

pub use entities::*;
pub use envelope::{MessageType, ReplyTo, SignedEnvelope};
pub use errors::*;
pub use response::NodeResponse;
