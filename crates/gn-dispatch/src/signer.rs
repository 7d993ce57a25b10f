//! # Envelope Signing and Verification
//!
//! Verification order is fixed: version first, then signer key shape, then
//! the signature over the unsigned serialization. Replies are sealed with
//! the node's own keypair and reuse the request's message type, reply
//! address, and correlation id.

use shared_crypto::{NodeKeyPair, Signature, VerifyKey};
use shared_types::{MessageError, MessageType, ReplyTo, SignedEnvelope};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Failure to seal an outbound envelope. Verification failures are
/// [`MessageError`]; this covers only the node's own signing path.
#[derive(Debug, Error)]
pub enum SignerError {
    #[error("envelope serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Check version, signer key, and signature of an inbound envelope and
/// return the verified signer key.
pub fn verify_envelope(envelope: &SignedEnvelope) -> Result<VerifyKey, MessageError> {
    if envelope.version != SignedEnvelope::CURRENT_VERSION {
        return Err(MessageError::UnsupportedVersion {
            received: envelope.version,
            supported: SignedEnvelope::CURRENT_VERSION,
        });
    }
    let signer =
        VerifyKey::from_hex(&envelope.signer).map_err(|_| MessageError::InvalidSignerKey)?;
    let bytes = envelope
        .signing_bytes()
        .map_err(|e| MessageError::Malformed(e.to_string()))?;
    let signature = Signature::from_bytes(envelope.signature);
    signer
        .verify(&bytes, &signature)
        .map_err(|_| MessageError::InvalidSignature)?;
    Ok(signer)
}

/// Build and sign an envelope with the given keypair.
pub fn seal_envelope(
    keypair: &NodeKeyPair,
    msg_type: MessageType,
    content: serde_json::Value,
    reply_to: ReplyTo,
    correlation_id: Uuid,
) -> Result<SignedEnvelope, SignerError> {
    let mut envelope = SignedEnvelope {
        version: SignedEnvelope::CURRENT_VERSION,
        msg_type,
        content,
        reply_to,
        correlation_id,
        signer: keypair.verify_key().to_hex(),
        signature: [0u8; 64],
    };
    let bytes = envelope.signing_bytes()?;
    envelope.signature = keypair.sign(&bytes).to_bytes();
    Ok(envelope)
}

/// Seals every reply with the node's keypair.
#[derive(Clone)]
pub struct ResponseSigner {
    keypair: Arc<NodeKeyPair>,
}

impl ResponseSigner {
    pub fn new(keypair: Arc<NodeKeyPair>) -> Self {
        Self { keypair }
    }

    /// The node's own verify key.
    pub fn verify_key(&self) -> VerifyKey {
        self.keypair.verify_key()
    }

    /// Sign a reply envelope carrying the request's message type, reply
    /// address, and correlation id.
    pub fn seal(
        &self,
        msg_type: MessageType,
        content: serde_json::Value,
        reply_to: ReplyTo,
        correlation_id: Uuid,
    ) -> Result<SignedEnvelope, SignerError> {
        seal_envelope(&self.keypair, msg_type, content, reply_to, correlation_id)
    }
}
