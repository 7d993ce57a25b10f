//! # Outbound Ports
//!
//! The dispatch layer never talks to a cloud provider directly; it hands
//! accepted worker requests to an [`InfraGateway`] and replies immediately.
//! Provisioning completes in the background and commits its outcome through
//! the worker manager.

use async_trait::async_trait;
use shared_types::Worker;
use thiserror::Error;

/// Failure to enqueue a provisioning request. Completion failures never
/// surface here; they are recorded as the worker's terminal status.
#[derive(Debug, Error)]
pub enum InfraError {
    #[error("provisioning backend unavailable: {0}")]
    Unavailable(String),
}

/// Fire-and-forget gateway to the background provisioner.
#[async_trait]
pub trait InfraGateway: Send + Sync {
    /// Start deploying a registered worker. Returns once the request is
    /// accepted; the worker stays `Pending` until the background task
    /// commits `Deployed` or `Failed`.
    async fn request_deploy(&self, worker: Worker) -> Result<(), InfraError>;

    /// Start tearing down a worker's infrastructure. The worker record
    /// moves to `Destroyed` only when teardown succeeds.
    async fn request_destroy(&self, worker: Worker) -> Result<(), InfraError>;
}
