//! # Message Dispatch Subsystem (GN-DISPATCH)
//!
//! The secure core of the node: verifies inbound signed envelopes, resolves
//! the acting user, routes each message type to its handler through the
//! capability guard, and wraps every outcome, success or failure, in a
//! signed reply envelope.
//!
//! ## Architecture
//!
//! This subsystem follows hexagonal architecture:
//! - **Domain Layer** (`domain/`): request context, content-key extraction.
//! - **Ports Layer** (`ports/`): the outbound `InfraGateway` trait.
//! - **Adapters Layer** (`adapters/`): gateway backed by the background
//!   provisioner.
//! - **Service Layer** (`service.rs`): `NodeService`, the single entry
//!   point `handle(envelope) -> signed reply`.
//!
//! ## Data Flow
//!
//! ```text
//! SignedEnvelope
//!   └─ verify_envelope ── signature + version checks
//!        └─ RequestContext ── explicit acting user or verify-key lookup
//!             └─ route ── exhaustive match over MessageType
//!                  └─ handler ── AuthorizationGuard, ResourceManagers
//!                       └─ sanitize ── domain errors pass, the rest is
//!                          replaced by the fixed internal-error message
//!                            └─ ResponseSigner ── signed reply envelope
//! ```

pub mod adapters;
pub mod auth;
pub mod boundary;
pub mod domain;
pub mod handlers;
pub mod ports;
pub mod router;
pub mod service;
pub mod signer;

pub use auth::AuthorizationGuard;
pub use domain::context::RequestContext;
pub use domain::error::DispatchError;
pub use ports::outbound::{InfraError, InfraGateway};
pub use service::{NodeContext, NodeError, NodeService};
pub use signer::{seal_envelope, verify_envelope, ResponseSigner, SignerError};
