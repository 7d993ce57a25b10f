//! # Dispatch Error
//!
//! Splits every handler failure into the two kinds the sanitization
//! boundary distinguishes: expected domain errors, which cross the boundary
//! with message and status intact, and everything else, which is logged
//! privately and replaced by the fixed generic message.

use gn_store::ManagerError;
use shared_types::DomainError;
use thiserror::Error;

use crate::ports::outbound::InfraError;

/// Failure of one dispatched handler invocation.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Expected failure; surfaced to the caller.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Unexpected failure; sanitized at the boundary.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<ManagerError> for DispatchError {
    fn from(err: ManagerError) -> Self {
        match err {
            ManagerError::Domain(domain) => Self::Domain(domain),
            ManagerError::Store(store) => Self::Internal(anyhow::Error::new(store)),
        }
    }
}

impl From<InfraError> for DispatchError {
    fn from(err: InfraError) -> Self {
        Self::Internal(anyhow::Error::new(err))
    }
}
