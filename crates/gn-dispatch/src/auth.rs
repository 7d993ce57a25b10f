//! # Authorization Guard
//!
//! Capability checks for the acting user, plus the barrier that keeps a
//! check-then-mutate sequence atomic with respect to concurrent role edits.

use gn_store::{RoleManager, UserManager};
use parking_lot::Mutex;
use shared_types::{Capability, DomainError, Role, User};
use std::sync::Arc;

use crate::domain::error::DispatchError;

/// Resolves the acting user's role and answers capability questions.
///
/// Guarded mutations run under the `barrier` lock so that a concurrent
/// role edit cannot land between the capability check and the mutation it
/// authorizes. Reads skip the barrier; a stale read of a capability that
/// was true at check time is acceptable for queries.
pub struct AuthorizationGuard {
    users: Arc<UserManager>,
    roles: Arc<RoleManager>,
    barrier: Mutex<()>,
}

impl AuthorizationGuard {
    pub fn new(users: Arc<UserManager>, roles: Arc<RoleManager>) -> Self {
        Self {
            users,
            roles,
            barrier: Mutex::new(()),
        }
    }

    /// The acting user and their role. An acting-user id that resolves to
    /// no user is `UserNotFound`; a dangling role reference is
    /// `RoleNotFound`.
    pub fn subject(&self, user_id: uuid::Uuid) -> Result<(User, Role), DispatchError> {
        let user = self.users.first_by_id(user_id)?;
        let role = self.roles.first_by_id(user.role_id)?;
        Ok((user, role))
    }

    /// Whether the acting user's role carries the capability.
    pub fn check(&self, user_id: uuid::Uuid, capability: Capability) -> Result<bool, DispatchError> {
        let (_, role) = self.subject(user_id)?;
        Ok(role.capabilities.has(capability))
    }

    /// Fail with a verbatim authorization message unless the acting user
    /// holds the capability.
    pub fn require(
        &self,
        user_id: uuid::Uuid,
        capability: Capability,
        denial: &str,
    ) -> Result<(), DispatchError> {
        if self.check(user_id, capability)? {
            Ok(())
        } else {
            Err(DomainError::authorization(denial).into())
        }
    }

    /// Run a capability-guarded mutation atomically: the check and the
    /// mutation happen under one barrier lock, so no concurrent role edit
    /// can interleave between them.
    pub fn authorize_then<R>(
        &self,
        user_id: uuid::Uuid,
        capability: Capability,
        denial: &str,
        op: impl FnOnce() -> Result<R, DispatchError>,
    ) -> Result<R, DispatchError> {
        let _guard = self.barrier.lock();
        self.require(user_id, capability, denial)?;
        op()
    }

}
