//! # Owner Bootstrap
//!
//! Creates the single owner role (all capabilities) and the owner user at
//! first startup. On a restart over a persistent store the existing owner
//! is reused; creating a second owner with a different key is rejected.

use gn_dispatch::NodeContext;
use gn_store::ManagerError;
use shared_types::{Capabilities, DomainError, Role, User};
use tracing::info;

/// Ensure the owner role and owner user exist.
///
/// Idempotent for the same owner key; fails with `OwnerAlreadyExists` when
/// an owner role is already present but bound to a different verify key.
pub fn ensure_owner(
    context: &NodeContext,
    role_name: &str,
    owner_key_hex: &str,
) -> Result<(Role, User), ManagerError> {
    match context.roles.first_by_name(role_name) {
        Ok(role) => {
            let user = context
                .users
                .first_by_verify_key(owner_key_hex)
                .map_err(|err| match err {
                    ManagerError::Domain(DomainError::UserNotFound) => {
                        ManagerError::Domain(DomainError::OwnerAlreadyExists)
                    }
                    other => other,
                })?;
            info!(role = %role.name, user = %user.id, "owner already bootstrapped");
            Ok((role, user))
        }
        Err(ManagerError::Domain(DomainError::RoleNotFound)) => {
            let role = context
                .roles
                .register(Role::new(role_name, Capabilities::all()))?;
            let user = context
                .users
                .register(User::new(owner_key_hex, role.id))?;
            info!(role = %role.name, user = %user.id, "owner bootstrapped");
            Ok((role, user))
        }
        Err(other) => Err(other),
    }
}
