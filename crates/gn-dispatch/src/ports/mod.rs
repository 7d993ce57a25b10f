//! Ports layer: outbound trait toward the provisioning subsystem.

pub mod outbound;
