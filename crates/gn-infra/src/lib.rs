//! # Infrastructure Provisioning Subsystem (GN-INFRA)
//!
//! Deploying and destroying cloud workers is long-running and must never
//! block the dispatch path. This crate provides:
//!
//! - the [`Provider`] trait, the boundary to the external provisioning
//!   collaborator (a declarative-infra tool in production);
//! - [`Provisioner`], a background task runner that owns the worker
//!   status-transition contract: `pending -> deployed | failed`, performed
//!   as a single atomic update, with best-effort cancellation.
//!
//! The dispatch handler registers a pending worker, hands the id to the
//! provisioner, and returns immediately.

pub mod provider;
pub mod provisioner;

pub use provider::{LocalProvider, Provider, ProviderOutput, ProvisionError};
pub use provisioner::Provisioner;
