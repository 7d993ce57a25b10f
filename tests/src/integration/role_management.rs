//! Role and user management over signed envelopes: the owner administers
//! roles, a triage-only auditor can read but never mutate, and every
//! denial is verbatim and side-effect free.

#[cfg(test)]
mod tests {
    use crate::harness::TestNode;
    use shared_types::MessageType;

    #[tokio::test]
    async fn owner_full_role_lifecycle() {
        let node = TestNode::start();

        let created = node
            .send_as_owner(
                MessageType::CreateRole,
                serde_json::json!({
                    "name": "auditor",
                    "can_triage_requests": true,
                }),
            )
            .await;
        assert_eq!(created.status_code, 200);
        assert_eq!(created.content["msg"], "Role created successfully!");

        let auditor = node
            .service
            .context()
            .roles
            .first_by_name("auditor")
            .unwrap();

        // Partial update: grant one more capability, leave the rest alone.
        let updated = node
            .send_as_owner(
                MessageType::UpdateRole,
                serde_json::json!({
                    "role_id": auditor.id,
                    "can_upload_data": true,
                }),
            )
            .await;
        assert_eq!(updated.status_code, 200);
        assert_eq!(updated.content["msg"], "Role updated successfully!");

        let fetched = node
            .send_as_owner(
                MessageType::GetRole,
                serde_json::json!({ "role_id": auditor.id }),
            )
            .await;
        assert_eq!(fetched.status_code, 200);
        assert_eq!(fetched.content["name"], "auditor");
        assert_eq!(fetched.content["can_triage_requests"], true);
        assert_eq!(fetched.content["can_upload_data"], true);
        assert_eq!(fetched.content["can_edit_roles"], false);

        let listing = node
            .send_as_owner(MessageType::GetRoles, serde_json::json!({}))
            .await;
        assert_eq!(listing.status_code, 200);
        assert_eq!(listing.content.as_array().unwrap().len(), 2);

        let deleted = node
            .send_as_owner(
                MessageType::DeleteRole,
                serde_json::json!({ "role_id": auditor.id }),
            )
            .await;
        assert_eq!(deleted.status_code, 200);
        assert_eq!(deleted.content["msg"], "Role has been deleted!");

        // Deleting again is not-found, not a silent success.
        let again = node
            .send_as_owner(
                MessageType::DeleteRole,
                serde_json::json!({ "role_id": auditor.id }),
            )
            .await;
        assert_eq!(again.status_code, 404);
        assert_eq!(again.content["error"], "Role not found!");
    }

    #[tokio::test]
    async fn auditor_reads_but_cannot_mutate() {
        let node = TestNode::start();
        let auditor_keys = node
            .register_user_with_role(
                "auditor",
                serde_json::json!({ "can_triage_requests": true }),
            )
            .await;

        let listing = node
            .send(&auditor_keys, MessageType::GetRoles, serde_json::json!({}))
            .await;
        assert_eq!(listing.status_code, 200);
        assert_eq!(listing.content.as_array().unwrap().len(), 2);

        let before = node.service.context().roles.all().unwrap();

        let denied = node
            .send(
                &auditor_keys,
                MessageType::CreateRole,
                serde_json::json!({ "name": "backdoor", "can_edit_roles": true }),
            )
            .await;
        assert_eq!(denied.status_code, 403);
        assert_eq!(
            denied.content["error"],
            "You're not allowed to create a new Role!"
        );

        // Denied mutations leave the table untouched.
        assert_eq!(node.service.context().roles.all().unwrap(), before);

        let owner_role = node.service.context().roles.first_by_name("Owner").unwrap();
        let denied_edit = node
            .send(
                &auditor_keys,
                MessageType::UpdateRole,
                serde_json::json!({ "role_id": owner_role.id, "name": "pwned" }),
            )
            .await;
        assert_eq!(denied_edit.status_code, 403);
        assert_eq!(
            denied_edit.content["error"],
            "You're not authorized to edit this role!"
        );

        let denied_delete = node
            .send(
                &auditor_keys,
                MessageType::DeleteRole,
                serde_json::json!({ "role_id": owner_role.id }),
            )
            .await;
        assert_eq!(denied_delete.status_code, 403);
        assert_eq!(
            denied_delete.content["error"],
            "You're not authorized to delete this role!"
        );
        assert_eq!(node.service.context().roles.all().unwrap(), before);
    }

    #[tokio::test]
    async fn duplicate_role_name_is_a_conflict() {
        let node = TestNode::start();
        let first = node
            .send_as_owner(
                MessageType::CreateRole,
                serde_json::json!({ "name": "auditor" }),
            )
            .await;
        assert_eq!(first.status_code, 200);

        let second = node
            .send_as_owner(
                MessageType::CreateRole,
                serde_json::json!({ "name": "auditor", "can_upload_data": true }),
            )
            .await;
        assert_eq!(second.status_code, 409);
        assert_eq!(second.content["error"], "The role name already exists!");
    }

    #[tokio::test]
    async fn created_users_are_listed_for_triage() {
        let node = TestNode::start();
        node.register_user_with_role(
            "auditor",
            serde_json::json!({ "can_triage_requests": true }),
        )
        .await;

        let listing = node
            .send_as_owner(MessageType::GetUsers, serde_json::json!({}))
            .await;
        assert_eq!(listing.status_code, 200);
        assert_eq!(listing.content.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn user_creation_requires_an_existing_role() {
        let node = TestNode::start();
        let response = node
            .send_as_owner(
                MessageType::CreateUser,
                serde_json::json!({
                    "verify_key": shared_crypto::NodeKeyPair::generate().verify_key().to_hex(),
                    "role_id": uuid::Uuid::new_v4(),
                }),
            )
            .await;
        assert_eq!(response.status_code, 404);
        assert_eq!(response.content["error"], "Role not found!");
    }

    #[tokio::test]
    async fn missing_required_key_is_reported_by_name() {
        let node = TestNode::start();
        let response = node
            .send_as_owner(MessageType::CreateRole, serde_json::json!({ "name": "" }))
            .await;
        assert_eq!(response.status_code, 400);
        assert_eq!(response.content["error"], "Missing request key: name!");
    }
}
