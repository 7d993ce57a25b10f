//! Test fixture: a fully wired in-memory node plus helpers for sending
//! signed requests and decoding signed replies.

use gn_dispatch::signer::{seal_envelope, verify_envelope};
use gn_dispatch::NodeService;
use node_runtime::{NodeConfig, NodeRuntime};
use shared_crypto::NodeKeyPair;
use shared_types::{MessageType, NodeResponse, ReplyTo, SignedEnvelope};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// A bootstrapped in-memory node whose owner user is bound to a keypair
/// the test controls.
pub struct TestNode {
    pub runtime: NodeRuntime,
    pub service: Arc<NodeService>,
    pub owner_keys: NodeKeyPair,
}

impl TestNode {
    /// Build a node over the in-memory store and bootstrap the owner.
    pub fn start() -> Self {
        let owner_keys = NodeKeyPair::generate();
        let config = NodeConfig {
            owner_verify_key: Some(owner_keys.verify_key().to_hex()),
            owner_role_name: "Owner".to_owned(),
            ..NodeConfig::default()
        };
        let runtime = NodeRuntime::build(&config).expect("node builds over the memory store");
        let service = runtime.service();
        Self {
            runtime,
            service,
            owner_keys,
        }
    }

    /// Sign and send one request, returning the decoded response after
    /// checking the reply envelope's signature and correlation.
    pub async fn send(
        &self,
        keys: &NodeKeyPair,
        msg_type: MessageType,
        content: serde_json::Value,
    ) -> NodeResponse {
        let envelope = sign_request(keys, msg_type, content);
        let correlation_id = envelope.correlation_id;
        let reply = self
            .service
            .handle(envelope)
            .await
            .expect("handle always yields a reply");
        assert_eq!(reply.correlation_id, correlation_id);
        assert_eq!(reply.msg_type, msg_type);
        let node_key = verify_envelope(&reply).expect("reply carries a valid node signature");
        assert_eq!(node_key.to_hex(), self.runtime.verify_key_hex());
        serde_json::from_value(reply.content).expect("reply content is a NodeResponse")
    }

    /// Send as the owner.
    pub async fn send_as_owner(
        &self,
        msg_type: MessageType,
        content: serde_json::Value,
    ) -> NodeResponse {
        let keys = NodeKeyPair::from_seed(self.owner_keys.to_seed());
        self.send(&keys, msg_type, content).await
    }

    /// Register a role and a user bound to a fresh keypair, via signed
    /// owner requests. Returns the new user's keys.
    pub async fn register_user_with_role(
        &self,
        role_name: &str,
        capabilities: serde_json::Value,
    ) -> NodeKeyPair {
        let mut content = capabilities;
        content["name"] = serde_json::json!(role_name);
        let created = self.send_as_owner(MessageType::CreateRole, content).await;
        assert_eq!(created.status_code, 200, "role creation failed: {created:?}");

        let role = self
            .service
            .context()
            .roles
            .first_by_name(role_name)
            .expect("role was just created");

        let keys = NodeKeyPair::generate();
        let response = self
            .send_as_owner(
                MessageType::CreateUser,
                serde_json::json!({
                    "verify_key": keys.verify_key().to_hex(),
                    "role_id": role.id,
                }),
            )
            .await;
        assert_eq!(response.status_code, 200, "user creation failed: {response:?}");
        keys
    }

    /// Poll until the worker reaches `expected` or the deadline passes.
    pub async fn await_worker_status(
        &self,
        worker_id: Uuid,
        expected: shared_types::WorkerStatus,
    ) -> shared_types::Worker {
        for _ in 0..200 {
            let worker = self
                .service
                .context()
                .workers
                .first_by_id(worker_id)
                .expect("worker exists");
            if worker.status == expected {
                return worker;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("worker {worker_id} never reached {expected:?}");
    }
}

/// Build a signed request envelope addressed to the node.
pub fn sign_request(
    keys: &NodeKeyPair,
    msg_type: MessageType,
    content: serde_json::Value,
) -> SignedEnvelope {
    seal_envelope(
        keys,
        msg_type,
        content,
        ReplyTo {
            address: "test-client".into(),
        },
        Uuid::new_v4(),
    )
    .expect("request seals")
}
