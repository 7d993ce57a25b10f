//! # Provisioner Gateway
//!
//! Adapts the background [`Provisioner`] to the dispatch-facing
//! [`InfraGateway`] port. Spawned task handles are dropped; the tasks
//! themselves report through the worker manager.

use async_trait::async_trait;
use gn_infra::Provisioner;
use shared_types::Worker;
use std::sync::Arc;

use crate::ports::outbound::{InfraError, InfraGateway};

pub struct ProvisionerGateway {
    provisioner: Arc<Provisioner>,
}

impl ProvisionerGateway {
    pub fn new(provisioner: Arc<Provisioner>) -> Self {
        Self { provisioner }
    }
}

#[async_trait]
impl InfraGateway for ProvisionerGateway {
    async fn request_deploy(&self, worker: Worker) -> Result<(), InfraError> {
        self.provisioner.spawn_deploy(worker);
        Ok(())
    }

    async fn request_destroy(&self, worker: Worker) -> Result<(), InfraError> {
        self.provisioner.spawn_destroy(worker);
        Ok(())
    }
}
