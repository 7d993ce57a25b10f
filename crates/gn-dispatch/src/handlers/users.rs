//! User management handlers.

use serde_json::Value;
use shared_crypto::VerifyKey;
use shared_types::{Capability, DomainError, NodeResponse, User};
use uuid::Uuid;

use crate::domain::content;
use crate::domain::error::DispatchError;
use crate::service::NodeContext;

pub fn create_user(
    node: &NodeContext,
    actor: Uuid,
    payload: &Value,
) -> Result<NodeResponse, DispatchError> {
    let verify_key = content::require_str(payload, "verify_key")?.to_owned();
    let role_id = content::require_uuid(payload, "role_id")?;

    // Reject keys that are not valid curve points before touching the table.
    VerifyKey::from_hex(&verify_key)
        .map_err(|_| DomainError::invalid("key 'verify_key' is not a valid verify key"))?;

    node.guard.authorize_then(
        actor,
        Capability::CreateUsers,
        "You're not allowed to create a new User!",
        || {
            // The role must exist before a user may reference it.
            node.roles.first_by_id(role_id)?;
            node.users.register(User::new(verify_key, role_id))?;
            Ok(())
        },
    )?;

    Ok(NodeResponse::message("User created successfully!"))
}

pub fn get_users(node: &NodeContext, actor: Uuid) -> Result<NodeResponse, DispatchError> {
    node.guard.require(
        actor,
        Capability::TriageRequests,
        "You're not allowed to get User information!",
    )?;
    let users = node.users.all()?;
    Ok(NodeResponse::ok(serde_json::to_value(users).map_err(
        anyhow::Error::new,
    )?))
}
