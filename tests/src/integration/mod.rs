//! End-to-end flows through `NodeService::handle`.

pub mod role_management;
pub mod security;
pub mod worker_provisioning;
