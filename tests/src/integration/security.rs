//! Envelope validation and identity resolution at the node boundary.

#[cfg(test)]
mod tests {
    use crate::harness::{sign_request, TestNode};
    use shared_crypto::NodeKeyPair;
    use shared_types::{MessageType, NodeResponse, SignedEnvelope};

    #[tokio::test]
    async fn unknown_signer_is_user_not_found() {
        let node = TestNode::start();
        let guest = NodeKeyPair::generate();
        let response = node
            .send(&guest, MessageType::GetRoles, serde_json::json!({}))
            .await;
        assert_eq!(response.status_code, 404);
        assert_eq!(response.content["error"], "User not found!");
    }

    #[tokio::test]
    async fn explicit_current_user_is_honored_for_queries() {
        let node = TestNode::start();
        let guest = NodeKeyPair::generate();
        let owner = node
            .service
            .context()
            .users
            .first_by_verify_key(&node.owner_keys.verify_key().to_hex())
            .unwrap();

        let response = node
            .send(
                &guest,
                MessageType::GetRoles,
                serde_json::json!({ "current_user": owner.id }),
            )
            .await;
        assert_eq!(response.status_code, 200);
    }

    #[tokio::test]
    async fn forged_current_user_grants_no_mutation_rights() {
        let node = TestNode::start();
        let guest = NodeKeyPair::generate();
        let owner = node
            .service
            .context()
            .users
            .first_by_verify_key(&node.owner_keys.verify_key().to_hex())
            .unwrap();

        // On mutation paths the acting user comes from the signer, so a
        // guest claiming the owner's id stays a guest.
        let response = node
            .send(
                &guest,
                MessageType::CreateRole,
                serde_json::json!({
                    "current_user": owner.id,
                    "name": "backdoor",
                    "can_edit_roles": true,
                }),
            )
            .await;
        assert_eq!(response.status_code, 404);
        assert_eq!(response.content["error"], "User not found!");
        assert!(node
            .service
            .context()
            .roles
            .first_by_name("backdoor")
            .is_err());
    }

    async fn handle_raw(node: &TestNode, envelope: SignedEnvelope) -> NodeResponse {
        let reply = node.service.handle(envelope).await.unwrap();
        serde_json::from_value(reply.content).unwrap()
    }

    #[tokio::test]
    async fn tampered_content_is_rejected_before_dispatch() {
        let node = TestNode::start();
        let keys = NodeKeyPair::from_seed(node.owner_keys.to_seed());
        let mut envelope = sign_request(&keys, MessageType::GetRoles, serde_json::json!({}));
        envelope.content = serde_json::json!({ "name": "injected" });

        let response = handle_raw(&node, envelope).await;
        assert_eq!(response.status_code, 400);
        assert_eq!(response.content["error"], "Invalid signature");

        // The mutation behind the tampered payload never ran.
        assert_eq!(node.service.context().roles.all().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unsupported_version_is_rejected() {
        let node = TestNode::start();
        let keys = NodeKeyPair::from_seed(node.owner_keys.to_seed());
        let mut envelope = sign_request(&keys, MessageType::GetRoles, serde_json::json!({}));
        envelope.version = 2;

        let response = handle_raw(&node, envelope).await;
        assert_eq!(response.status_code, 400);
        assert_eq!(
            response.content["error"],
            "Unsupported version: received 2, supported 1"
        );
    }

    #[tokio::test]
    async fn unknown_message_tag_never_deserializes() {
        let raw = serde_json::json!({
            "version": 1,
            "msg_type": "drop_all_tables",
            "content": {},
            "reply_to": { "address": "test-client" },
            "correlation_id": uuid::Uuid::new_v4(),
            "signer": "ab".repeat(32),
            "signature": vec![0u8; 64],
        });
        let parsed: Result<SignedEnvelope, _> = serde_json::from_value(raw);
        assert!(parsed.is_err());
    }
}
