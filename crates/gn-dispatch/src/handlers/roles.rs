//! Role management handlers.

use serde_json::Value;
use shared_types::{Capabilities, Capability, DomainError, NodeResponse, Role, RolePatch};
use uuid::Uuid;

use crate::domain::content;
use crate::domain::error::DispatchError;
use crate::service::NodeContext;

pub fn create_role(
    node: &NodeContext,
    actor: Uuid,
    payload: &Value,
) -> Result<NodeResponse, DispatchError> {
    let name = content::require_str(payload, "name")?.to_owned();
    let capabilities: Capabilities = content::parse_payload(payload)?;

    node.guard.authorize_then(
        actor,
        Capability::EditRoles,
        "You're not allowed to create a new Role!",
        || {
            node.roles.register(Role::new(name, capabilities))?;
            Ok(())
        },
    )?;

    Ok(NodeResponse::message("Role created successfully!"))
}

pub fn update_role(
    node: &NodeContext,
    actor: Uuid,
    payload: &Value,
) -> Result<NodeResponse, DispatchError> {
    let role_id = content::require_uuid(payload, "role_id")?;
    let patch: RolePatch = content::parse_payload(payload)?;
    if patch.is_empty() {
        return Err(DomainError::missing_key("role params").into());
    }

    node.guard.authorize_then(
        actor,
        Capability::EditRoles,
        "You're not authorized to edit this role!",
        || {
            node.roles.set(role_id, &patch)?;
            Ok(())
        },
    )?;

    Ok(NodeResponse::message("Role updated successfully!"))
}

pub fn get_role(
    node: &NodeContext,
    actor: Uuid,
    payload: &Value,
) -> Result<NodeResponse, DispatchError> {
    let role_id = content::require_uuid(payload, "role_id")?;
    node.guard.require(
        actor,
        Capability::TriageRequests,
        "You're not allowed to get Role information!",
    )?;
    let role = node.roles.first_by_id(role_id)?;
    Ok(NodeResponse::ok(serde_json::to_value(role).map_err(
        anyhow::Error::new,
    )?))
}

pub fn get_roles(node: &NodeContext, actor: Uuid) -> Result<NodeResponse, DispatchError> {
    node.guard.require(
        actor,
        Capability::TriageRequests,
        "You're not allowed to get Role information!",
    )?;
    let roles = node.roles.all()?;
    Ok(NodeResponse::ok(serde_json::to_value(roles).map_err(
        anyhow::Error::new,
    )?))
}

pub fn delete_role(
    node: &NodeContext,
    actor: Uuid,
    payload: &Value,
) -> Result<NodeResponse, DispatchError> {
    let role_id = content::require_uuid(payload, "role_id")?;

    node.guard.authorize_then(
        actor,
        Capability::EditRoles,
        "You're not authorized to delete this role!",
        || {
            node.roles.delete(role_id)?;
            Ok(())
        },
    )?;

    Ok(NodeResponse::message("Role has been deleted!"))
}
