//! Worker infrastructure handlers.
//!
//! `create_worker` and `delete_worker` reply as soon as the provisioning
//! request is accepted; the background provisioner commits the terminal
//! status through the worker manager.

use serde_json::Value;
use shared_types::{Capability, NodeResponse, Worker, WorkerFilters};
use uuid::Uuid;

use crate::domain::content;
use crate::domain::error::DispatchError;
use crate::service::NodeContext;

pub async fn create_worker(
    node: &NodeContext,
    actor: Uuid,
    payload: &Value,
) -> Result<NodeResponse, DispatchError> {
    let provider = content::require_str(payload, "provider")?.to_owned();
    let region = content::require_str(payload, "region")?.to_owned();
    let instance_type = content::require_str(payload, "instance_type")?.to_owned();

    let worker = node.guard.authorize_then(
        actor,
        Capability::ManageInfrastructure,
        "You're not allowed to create a new Worker!",
        || {
            let worker = node
                .workers
                .register(Worker::new(provider, region, instance_type))?;
            Ok(worker)
        },
    )?;

    node.infra.request_deploy(worker.clone()).await?;

    Ok(NodeResponse::ok(serde_json::json!({
        "msg": "Worker deployment has started!",
        "worker_id": worker.id,
        "status": worker.status,
    })))
}

pub async fn delete_worker(
    node: &NodeContext,
    actor: Uuid,
    payload: &Value,
) -> Result<NodeResponse, DispatchError> {
    let worker_id = content::require_uuid(payload, "worker_id")?;

    let worker = node.guard.authorize_then(
        actor,
        Capability::ManageInfrastructure,
        "You're not allowed to delete this Worker!",
        || {
            let worker = node.workers.first_by_id(worker_id)?;
            Ok(worker)
        },
    )?;

    node.infra.request_destroy(worker.clone()).await?;

    Ok(NodeResponse::ok(serde_json::json!({
        "msg": "Worker teardown has started!",
        "worker_id": worker.id,
        "status": worker.status,
    })))
}

pub fn get_worker(
    node: &NodeContext,
    actor: Uuid,
    payload: &Value,
) -> Result<NodeResponse, DispatchError> {
    let worker_id = content::require_uuid(payload, "worker_id")?;
    node.guard.require(
        actor,
        Capability::TriageRequests,
        "You're not allowed to get Worker information!",
    )?;
    let worker = node.workers.first_by_id(worker_id)?;
    Ok(NodeResponse::ok(serde_json::to_value(worker).map_err(
        anyhow::Error::new,
    )?))
}

pub fn get_workers(
    node: &NodeContext,
    actor: Uuid,
    payload: &Value,
) -> Result<NodeResponse, DispatchError> {
    node.guard.require(
        actor,
        Capability::TriageRequests,
        "You're not allowed to get Worker information!",
    )?;
    let filters: WorkerFilters = content::parse_payload(payload)?;
    let workers = node.workers.list(&filters)?;
    Ok(NodeResponse::ok(serde_json::to_value(workers).map_err(
        anyhow::Error::new,
    )?))
}
