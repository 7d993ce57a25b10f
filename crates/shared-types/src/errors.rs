//! # Error Taxonomy
//!
//! Domain errors are the *expected* failures of management operations. They
//! cross the dispatch boundary with their message and status code intact.
//! Anything that is not a `DomainError` is replaced at the boundary by the
//! fixed [`UNKNOWN_INTERNAL_MESSAGE`]; callers never see internal detail.

use thiserror::Error;

/// The one message callers receive when a handler fails unexpectedly. The
/// original error is logged privately and never serialized into a response.
pub const UNKNOWN_INTERNAL_MESSAGE: &str = "An unknown internal error has been triggered.";

/// Expected failures of management operations.
///
/// Each variant maps to a stable status code via [`DomainError::status_code`].
/// `Authorization` is trusted and always surfaced verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The acting user's role lacks the required capability.
    #[error("{message}")]
    Authorization { message: String },

    /// Role ID or name did not match any registered role.
    #[error("Role not found!")]
    RoleNotFound,

    /// User ID or verify key did not match any registered user.
    #[error("User not found!")]
    UserNotFound,

    /// Worker ID did not match any registered worker.
    #[error("Worker not found!")]
    WorkerNotFound,

    /// A role with the same name already exists.
    #[error("The role name already exists!")]
    RoleConflict,

    /// A user with the same verify key already exists.
    #[error("This verify key is already registered!")]
    UserConflict,

    /// A worker with the same id already exists.
    #[error("The worker already exists!")]
    WorkerConflict,

    /// The bootstrap owner role was created twice.
    #[error("This node already has an owner!")]
    OwnerAlreadyExists,

    /// A required content key was absent or empty.
    #[error("Missing request key: {key}!")]
    MissingRequestKey { key: String },

    /// A content key was present but malformed.
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
}

impl DomainError {
    /// Authorization denial with a handler-specific message.
    pub fn authorization(message: impl Into<String>) -> Self {
        Self::Authorization {
            message: message.into(),
        }
    }

    /// Missing required content key.
    pub fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingRequestKey { key: key.into() }
    }

    /// Malformed content value.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// The status classification carried on the outbound response.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Authorization { .. } => 403,
            Self::RoleNotFound | Self::UserNotFound | Self::WorkerNotFound => 404,
            Self::RoleConflict
            | Self::UserConflict
            | Self::WorkerConflict
            | Self::OwnerAlreadyExists => 409,
            Self::MissingRequestKey { .. } | Self::InvalidRequest { .. } => 400,
        }
    }
}

/// Failures of envelope validation, before any handler runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessageError {
    /// Message version not supported.
    #[error("Unsupported version: received {received}, supported {supported}")]
    UnsupportedVersion { received: u16, supported: u16 },

    /// The declared signer key is not valid hex or not a curve point.
    #[error("Invalid signer key")]
    InvalidSignerKey,

    /// The signature does not match the declared signer or the payload was
    /// altered.
    #[error("Invalid signature")]
    InvalidSignature,

    /// The envelope fields could not be serialized for verification.
    #[error("Malformed envelope: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_contract() {
        assert_eq!(DomainError::authorization("denied").status_code(), 403);
        assert_eq!(DomainError::RoleNotFound.status_code(), 404);
        assert_eq!(DomainError::WorkerNotFound.status_code(), 404);
        assert_eq!(DomainError::RoleConflict.status_code(), 409);
        assert_eq!(DomainError::OwnerAlreadyExists.status_code(), 409);
        assert_eq!(DomainError::missing_key("name").status_code(), 400);
        assert_eq!(DomainError::invalid("bad hex").status_code(), 400);
    }

    #[test]
    fn missing_key_names_the_key() {
        let err = DomainError::missing_key("role_id");
        assert_eq!(err.to_string(), "Missing request key: role_id!");
    }

    #[test]
    fn authorization_message_is_verbatim() {
        let err = DomainError::authorization("You're not allowed to create a new Role!");
        assert_eq!(
            err.to_string(),
            "You're not allowed to create a new Role!"
        );
    }
}
