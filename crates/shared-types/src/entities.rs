//! # Core Domain Entities
//!
//! Defines the management entities owned by a single node process.
//!
//! ## Clusters
//!
//! - **Access Control**: `Role`, `Capabilities`, `Capability`, `User`
//! - **Infrastructure**: `Worker`, `WorkerStatus`, `WorkerFilters`
//!
//! The node process exclusively owns all Role/User/Worker state for its
//! lifetime; resource managers are the sole mutators of their tables.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Hex-encoded Ed25519 verify key, the signature-derived identity of a user.
pub type VerifyKeyHex = String;

// =============================================================================
// CLUSTER A: ACCESS CONTROL
// =============================================================================

/// A named boolean permission attached to a `Role`, gating one category of
/// mutating or sensitive operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    TriageRequests,
    EditSettings,
    CreateUsers,
    CreateGroups,
    EditRoles,
    ManageInfrastructure,
    UploadData,
}

/// The full capability set of a role. Every flag defaults to `false` on
/// creation unless explicitly set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capabilities {
    #[serde(default)]
    pub can_triage_requests: bool,
    #[serde(default)]
    pub can_edit_settings: bool,
    #[serde(default)]
    pub can_create_users: bool,
    #[serde(default)]
    pub can_create_groups: bool,
    #[serde(default)]
    pub can_edit_roles: bool,
    #[serde(default)]
    pub can_manage_infrastructure: bool,
    #[serde(default)]
    pub can_upload_data: bool,
}

impl Capabilities {
    /// All capabilities granted. Used only by the bootstrap owner role.
    #[must_use]
    pub fn all() -> Self {
        Self {
            can_triage_requests: true,
            can_edit_settings: true,
            can_create_users: true,
            can_create_groups: true,
            can_edit_roles: true,
            can_manage_infrastructure: true,
            can_upload_data: true,
        }
    }

    /// Whether the named capability is set.
    #[must_use]
    pub fn has(&self, capability: Capability) -> bool {
        match capability {
            Capability::TriageRequests => self.can_triage_requests,
            Capability::EditSettings => self.can_edit_settings,
            Capability::CreateUsers => self.can_create_users,
            Capability::CreateGroups => self.can_create_groups,
            Capability::EditRoles => self.can_edit_roles,
            Capability::ManageInfrastructure => self.can_manage_infrastructure,
            Capability::UploadData => self.can_upload_data,
        }
    }
}

/// A role groups a unique name with a capability set.
///
/// Invariants: role names are unique within the node; at most one role is
/// the implicit owner role created at bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub id: Uuid,
    pub name: String,
    #[serde(flatten)]
    pub capabilities: Capabilities,
}

impl Role {
    /// Create a role with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, capabilities: Capabilities) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            capabilities,
        }
    }
}

/// Partial update for a role. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RolePatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_triage_requests: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit_settings: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_create_users: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_create_groups: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_edit_roles: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_manage_infrastructure: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub can_upload_data: Option<bool>,
}

impl RolePatch {
    /// True when no field is present, i.e. applying the patch would be a
    /// silent no-op.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.can_triage_requests.is_none()
            && self.can_edit_settings.is_none()
            && self.can_create_users.is_none()
            && self.can_create_groups.is_none()
            && self.can_edit_roles.is_none()
            && self.can_manage_infrastructure.is_none()
            && self.can_upload_data.is_none()
    }

    /// Apply the present fields onto `role`.
    pub fn apply(&self, role: &mut Role) {
        if let Some(name) = &self.name {
            role.name = name.clone();
        }
        let caps = &mut role.capabilities;
        if let Some(v) = self.can_triage_requests {
            caps.can_triage_requests = v;
        }
        if let Some(v) = self.can_edit_settings {
            caps.can_edit_settings = v;
        }
        if let Some(v) = self.can_create_users {
            caps.can_create_users = v;
        }
        if let Some(v) = self.can_create_groups {
            caps.can_create_groups = v;
        }
        if let Some(v) = self.can_edit_roles {
            caps.can_edit_roles = v;
        }
        if let Some(v) = self.can_manage_infrastructure {
            caps.can_manage_infrastructure = v;
        }
        if let Some(v) = self.can_upload_data {
            caps.can_upload_data = v;
        }
    }
}

/// A registered user of the node.
///
/// The `verify_key` is unique and is the lookup key for signature-derived
/// identity resolution; `role_id` must reference an existing role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub verify_key: VerifyKeyHex,
    pub role_id: Uuid,
}

impl User {
    /// Create a user with a fresh id.
    #[must_use]
    pub fn new(verify_key: impl Into<VerifyKeyHex>, role_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            verify_key: verify_key.into(),
            role_id,
        }
    }
}

/// Partial update for a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<Uuid>,
}

impl UserPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.role_id.is_none()
    }

    pub fn apply(&self, user: &mut User) {
        if let Some(role_id) = self.role_id {
            user.role_id = role_id;
        }
    }
}

// =============================================================================
// CLUSTER B: INFRASTRUCTURE
// =============================================================================

/// Lifecycle state of a provisioned worker.
///
/// The only legal transitions are `Pending -> Deployed`, `Pending -> Failed`
/// and `Deployed -> Destroyed`; the background provisioner performs each as
/// a single atomic update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerStatus {
    Pending,
    Deployed,
    Failed,
    Destroyed,
}

/// A cloud worker managed by the node.
///
/// Destroyed and failed workers are retained for audit unless explicitly
/// filtered out of listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: Uuid,
    pub status: WorkerStatus,
    pub provider: String,
    pub region: String,
    pub instance_type: String,
    /// Unix timestamp set when the provisioner reports a successful deploy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployed_at: Option<u64>,
}

impl Worker {
    /// Create a pending worker with a fresh id.
    #[must_use]
    pub fn new(
        provider: impl Into<String>,
        region: impl Into<String>,
        instance_type: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            status: WorkerStatus::Pending,
            provider: provider.into(),
            region: region.into(),
            instance_type: instance_type.into(),
            deployed_at: None,
        }
    }
}

/// Partial update for a worker.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkerPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<WorkerStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deployed_at: Option<u64>,
}

impl WorkerPatch {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.deployed_at.is_none()
    }

    pub fn apply(&self, worker: &mut Worker) {
        if let Some(status) = self.status {
            worker.status = status;
        }
        if let Some(deployed_at) = self.deployed_at {
            worker.deployed_at = Some(deployed_at);
        }
    }
}

/// Query-style booleans for worker listings. All default to `false`; a
/// `false` flag excludes the matching terminal status from results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerFilters {
    #[serde(default)]
    pub include_all: bool,
    #[serde(default)]
    pub include_failed: bool,
    #[serde(default)]
    pub include_destroyed: bool,
}

impl WorkerFilters {
    /// Whether a worker with `status` should appear in a listing.
    #[must_use]
    pub fn admits(&self, status: WorkerStatus) -> bool {
        if self.include_all {
            return true;
        }
        match status {
            WorkerStatus::Failed => self.include_failed,
            WorkerStatus::Destroyed => self.include_destroyed,
            WorkerStatus::Pending | WorkerStatus::Deployed => true,
        }
    }
}
