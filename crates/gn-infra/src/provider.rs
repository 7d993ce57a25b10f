//! # Provider Boundary
//!
//! The external collaborator that actually creates and tears down cloud
//! resources. Implementations validate their plan before applying it;
//! `deploy` returns the provider outputs (addresses, instance ids) on
//! success.

use async_trait::async_trait;
use shared_types::Worker;
use thiserror::Error;

/// Failures reported by a provisioning backend.
#[derive(Debug, Clone, Error)]
pub enum ProvisionError {
    /// The declarative plan did not validate.
    #[error("provider plan validation failed: {0}")]
    ValidationFailed(String),

    /// The apply step failed after validation.
    #[error("provider apply failed: {0}")]
    ApplyFailed(String),

    /// The teardown step failed.
    #[error("provider destroy failed: {0}")]
    DestroyFailed(String),
}

/// Outputs of a successful deployment.
#[derive(Debug, Clone, Default)]
pub struct ProviderOutput {
    /// Provider-specific output values (instance ids, addresses).
    pub outputs: serde_json::Value,
}

/// A provisioning backend. Implementations must be thread-safe.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Validate and apply the plan for `worker`. Long-running.
    async fn deploy(&self, worker: &Worker) -> Result<ProviderOutput, ProvisionError>;

    /// Tear down the resources of `worker`. Long-running.
    async fn destroy(&self, worker: &Worker) -> Result<(), ProvisionError>;
}

/// Development backend: succeeds immediately without touching any cloud.
#[derive(Debug, Default)]
pub struct LocalProvider;

#[async_trait]
impl Provider for LocalProvider {
    async fn deploy(&self, worker: &Worker) -> Result<ProviderOutput, ProvisionError> {
        Ok(ProviderOutput {
            outputs: serde_json::json!({
                "instance_id": format!("local-{}", worker.id),
                "provider": worker.provider,
            }),
        })
    }

    async fn destroy(&self, _worker: &Worker) -> Result<(), ProvisionError> {
        Ok(())
    }
}
