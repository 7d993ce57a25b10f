//! # Message Router
//!
//! Exhaustive dispatch over the closed `MessageType` enum. Adding a
//! variant without a handler arm is a compile error; an unknown tag on the
//! wire never reaches this function because envelope deserialization
//! rejects it first.

use shared_types::{MessageType, NodeResponse};
use tracing::debug;

use crate::domain::context::RequestContext;
use crate::domain::error::DispatchError;
use crate::handlers::{roles, users, workers};
use crate::service::NodeContext;

/// Resolve the acting user and route the message to its handler.
///
/// An explicit `current_user` is honored for query messages only;
/// mutations always act as the verified signer.
pub async fn route(
    node: &NodeContext,
    ctx: &RequestContext,
    msg_type: MessageType,
    content: &serde_json::Value,
) -> Result<NodeResponse, DispatchError> {
    let actor = ctx.resolve_acting_user(&node.users, msg_type.is_query())?;
    debug!(?msg_type, %actor, correlation_id = %ctx.correlation_id, "routing message");

    match msg_type {
        // Role management
        MessageType::CreateRole => roles::create_role(node, actor, content),
        MessageType::UpdateRole => roles::update_role(node, actor, content),
        MessageType::GetRole => roles::get_role(node, actor, content),
        MessageType::GetRoles => roles::get_roles(node, actor),
        MessageType::DeleteRole => roles::delete_role(node, actor, content),

        // User management
        MessageType::CreateUser => users::create_user(node, actor, content),
        MessageType::GetUsers => users::get_users(node, actor),

        // Worker infrastructure
        MessageType::CreateWorker => workers::create_worker(node, actor, content).await,
        MessageType::GetWorker => workers::get_worker(node, actor, content),
        MessageType::GetWorkers => workers::get_workers(node, actor, content),
        MessageType::DeleteWorker => workers::delete_worker(node, actor, content).await,
    }
}
