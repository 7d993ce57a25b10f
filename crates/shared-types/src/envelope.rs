//! # `SignedEnvelope` Message Wrapper
//!
//! The universal wrapper for every request and response processed by the
//! node.
//!
//! ## Security Properties
//!
//! - **Versioning**: All messages include a `version` field for forward
//!   compatibility.
//! - **Correlation**: Request/response flows use `correlation_id` and
//!   `reply_to`; a response is a new envelope carrying the request's
//!   correlation id.
//! - **Envelope Authority**: The `signer` field (hex-encoded Ed25519 verify
//!   key) is the sole source of signature-derived identity.
//! - **Immutability**: An envelope is never mutated after signing; the
//!   signature covers every field except itself.

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, Bytes};
use uuid::Uuid;

use crate::entities::VerifyKeyHex;

/// The closed set of message types the node serves.
///
/// The router matches this enum exhaustively, so adding a variant without a
/// handler is a compile error. An unknown tag on the wire fails envelope
/// deserialization before dispatch is ever attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    CreateRole,
    UpdateRole,
    GetRole,
    GetRoles,
    DeleteRole,
    CreateUser,
    GetUsers,
    CreateWorker,
    GetWorker,
    GetWorkers,
    DeleteWorker,
}

/// The address responses are routed back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyTo {
    /// Opaque transport address of the requester.
    pub address: String,
}

/// The signed message envelope.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignedEnvelope {
    /// Protocol version for forward compatibility. Checked before the
    /// signature is verified.
    pub version: u16,

    /// The message-type tag selecting the handler.
    pub msg_type: MessageType,

    /// The message payload: a JSON object with well-known string keys.
    /// Handlers ignore unrecognized keys.
    pub content: serde_json::Value,

    /// Where the response envelope is addressed.
    pub reply_to: ReplyTo,

    /// Correlates request/response pairs. A response reuses the request's
    /// correlation id.
    pub correlation_id: Uuid,

    /// Hex-encoded Ed25519 verify key of the sender.
    pub signer: VerifyKeyHex,

    /// Ed25519 signature over the deterministic serialization of all other
    /// fields.
    #[serde_as(as = "Bytes")]
    pub signature: [u8; 64],
}

impl MessageType {
    /// Whether the message only reads state.
    ///
    /// Query handlers may act as an explicitly named user; mutations always
    /// act as the verified signer, so a forged acting-user id can never
    /// reach a capability-guarded write.
    #[must_use]
    pub fn is_query(self) -> bool {
        matches!(
            self,
            Self::GetRole | Self::GetRoles | Self::GetUsers | Self::GetWorker | Self::GetWorkers
        )
    }
}

impl SignedEnvelope {
    /// Current protocol version.
    pub const CURRENT_VERSION: u16 = 1;

    /// The byte string the signature covers: the JSON serialization of every
    /// field except the signature itself.
    ///
    /// `serde_json` maps are ordered, so the serialization is deterministic
    /// for a given envelope.
    pub fn signing_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        let unsigned = UnsignedView {
            version: self.version,
            msg_type: self.msg_type,
            content: &self.content,
            reply_to: &self.reply_to,
            correlation_id: self.correlation_id,
            signer: &self.signer,
        };
        serde_json::to_vec(&unsigned)
    }
}

/// Borrow of the envelope fields covered by the signature.
#[derive(Serialize)]
struct UnsignedView<'a> {
    version: u16,
    msg_type: MessageType,
    content: &'a serde_json::Value,
    reply_to: &'a ReplyTo,
    correlation_id: Uuid,
    signer: &'a VerifyKeyHex,
}
