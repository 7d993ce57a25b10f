//! Crypto error types.

use thiserror::Error;

/// Failures of key handling and signature verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// The bytes are not a valid Ed25519 public key.
    #[error("invalid public key")]
    InvalidPublicKey,

    /// The hex encoding of a key identity could not be decoded.
    #[error("invalid hex-encoded key")]
    InvalidHexEncoding,

    /// The signature did not verify against the key and message.
    #[error("signature verification failed")]
    SignatureVerificationFailed,
}
