//! # Request Context
//!
//! Everything a handler may learn about the caller, captured explicitly at
//! the dispatch entry point. Acting-user resolution is a pure function of
//! this context plus the user table; handlers never read ambient state.

use crate::domain::content;
use crate::domain::error::DispatchError;
use gn_store::UserManager;
use shared_crypto::VerifyKey;
use shared_types::{DomainError, SignedEnvelope};
use uuid::Uuid;

/// The authenticated context of one request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The verified signer of the envelope.
    pub signer: VerifyKey,
    /// Acting-user id supplied in the content (`current_user`). Some
    /// internal callers read on behalf of a known user without re-deriving
    /// identity from the signature. Only query paths may trust it; the
    /// content is attacker-controlled, so mutations always act as the
    /// verified signer.
    pub explicit_user: Option<Uuid>,
    /// Correlation id of the request, carried into logs and the reply.
    pub correlation_id: Uuid,
}

impl RequestContext {
    /// Capture the context of a verified envelope. The `current_user`
    /// content key, when present, must be a well-formed id.
    pub fn from_envelope(
        envelope: &SignedEnvelope,
        signer: VerifyKey,
    ) -> Result<Self, DomainError> {
        let explicit_user = content::optional_uuid(&envelope.content, "current_user")?;
        Ok(Self {
            signer,
            explicit_user,
            correlation_id: envelope.correlation_id,
        })
    }

    /// The user this request acts as.
    ///
    /// When `trust_explicit` is set (query paths only) an explicit
    /// `current_user` wins. Otherwise the acting user is the unique user
    /// whose verify key matches the signer, and any explicit id is
    /// ignored. Fails with `UserNotFound` when the signer is a guest.
    pub fn resolve_acting_user(
        &self,
        users: &UserManager,
        trust_explicit: bool,
    ) -> Result<Uuid, DispatchError> {
        if trust_explicit {
            if let Some(user_id) = self.explicit_user {
                return Ok(user_id);
            }
        }
        let user = users.first_by_verify_key(&self.signer.to_hex())?;
        Ok(user.id)
    }
}
