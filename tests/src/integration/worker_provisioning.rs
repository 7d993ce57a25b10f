//! Worker provisioning end to end: the reply is immediate with a pending
//! worker, the background provisioner commits the terminal status, and
//! listings honor the filter booleans.

#[cfg(test)]
mod tests {
    use crate::harness::TestNode;
    use shared_types::{MessageType, WorkerStatus};
    use uuid::Uuid;

    async fn deploy_worker(node: &TestNode) -> Uuid {
        let response = node
            .send_as_owner(
                MessageType::CreateWorker,
                serde_json::json!({
                    "provider": "aws",
                    "region": "eu-west-1",
                    "instance_type": "t3.large",
                }),
            )
            .await;
        assert_eq!(response.status_code, 200);
        assert_eq!(response.content["status"], "pending");
        response.content["worker_id"]
            .as_str()
            .and_then(|raw| Uuid::parse_str(raw).ok())
            .expect("reply names the worker")
    }

    #[tokio::test]
    async fn deploy_completes_in_the_background() {
        let node = TestNode::start();
        let worker_id = deploy_worker(&node).await;

        let worker = node
            .await_worker_status(worker_id, WorkerStatus::Deployed)
            .await;
        assert!(worker.deployed_at.is_some());

        let fetched = node
            .send_as_owner(
                MessageType::GetWorker,
                serde_json::json!({ "worker_id": worker_id }),
            )
            .await;
        assert_eq!(fetched.status_code, 200);
        assert_eq!(fetched.content["status"], "deployed");
        assert_eq!(fetched.content["provider"], "aws");
    }

    #[tokio::test]
    async fn destroyed_workers_are_retained_but_filtered() {
        let node = TestNode::start();
        let worker_id = deploy_worker(&node).await;
        node.await_worker_status(worker_id, WorkerStatus::Deployed)
            .await;

        let response = node
            .send_as_owner(
                MessageType::DeleteWorker,
                serde_json::json!({ "worker_id": worker_id }),
            )
            .await;
        assert_eq!(response.status_code, 200);

        node.await_worker_status(worker_id, WorkerStatus::Destroyed)
            .await;

        // Default listing hides destroyed workers.
        let default_listing = node
            .send_as_owner(MessageType::GetWorkers, serde_json::json!({}))
            .await;
        assert_eq!(default_listing.status_code, 200);
        assert_eq!(default_listing.content.as_array().unwrap().len(), 0);

        // The record survives and is visible on request.
        let full_listing = node
            .send_as_owner(
                MessageType::GetWorkers,
                serde_json::json!({ "include_destroyed": true }),
            )
            .await;
        assert_eq!(full_listing.content.as_array().unwrap().len(), 1);
        assert_eq!(full_listing.content[0]["status"], "destroyed");
    }

    #[tokio::test]
    async fn worker_mutations_require_manage_infrastructure() {
        let node = TestNode::start();
        let auditor_keys = node
            .register_user_with_role(
                "auditor",
                serde_json::json!({ "can_triage_requests": true }),
            )
            .await;

        let denied = node
            .send(
                &auditor_keys,
                MessageType::CreateWorker,
                serde_json::json!({
                    "provider": "aws",
                    "region": "eu-west-1",
                    "instance_type": "t3.large",
                }),
            )
            .await;
        assert_eq!(denied.status_code, 403);
        assert_eq!(
            denied.content["error"],
            "You're not allowed to create a new Worker!"
        );
        assert!(node.service.context().workers.all().unwrap().is_empty());

        // Triage still covers reads.
        let listing = node
            .send(&auditor_keys, MessageType::GetWorkers, serde_json::json!({}))
            .await;
        assert_eq!(listing.status_code, 200);
    }

    #[tokio::test]
    async fn unknown_worker_is_not_found() {
        let node = TestNode::start();
        let response = node
            .send_as_owner(
                MessageType::GetWorker,
                serde_json::json!({ "worker_id": Uuid::new_v4() }),
            )
            .await;
        assert_eq!(response.status_code, 404);
        assert_eq!(response.content["error"], "Worker not found!");
    }
}
