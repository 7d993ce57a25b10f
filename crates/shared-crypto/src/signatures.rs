//! # Ed25519 Signatures
//!
//! Twisted Edwards curve signatures with deterministic nonces.
//!
//! The hex encoding of a [`VerifyKey`] is the canonical user identity on
//! the node: the user table stores it, and envelope verification resolves
//! signers through it.

use crate::CryptoError;
use ed25519_dalek::{Signer, SigningKey, Verifier, VerifyingKey};
use zeroize::Zeroize;

/// Ed25519 public key (32 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifyKey([u8; 32]);

impl VerifyKey {
    /// Create from raw bytes, validating the curve point.
    pub fn from_bytes(bytes: [u8; 32]) -> Result<Self, CryptoError> {
        VerifyingKey::from_bytes(&bytes).map_err(|_| CryptoError::InvalidPublicKey)?;
        Ok(Self(bytes))
    }

    /// Parse the canonical hex-encoded identity form.
    pub fn from_hex(encoded: &str) -> Result<Self, CryptoError> {
        let raw = hex::decode(encoded).map_err(|_| CryptoError::InvalidHexEncoding)?;
        let bytes: [u8; 32] = raw
            .try_into()
            .map_err(|_| CryptoError::InvalidHexEncoding)?;
        Self::from_bytes(bytes)
    }

    /// The canonical hex-encoded identity form.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get raw bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Verify a detached signature over `message`.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> Result<(), CryptoError> {
        let verifying_key =
            VerifyingKey::from_bytes(&self.0).map_err(|_| CryptoError::InvalidPublicKey)?;
        let sig = ed25519_dalek::Signature::from_bytes(&signature.0);
        verifying_key
            .verify(message, &sig)
            .map_err(|_| CryptoError::SignatureVerificationFailed)
    }
}

/// Ed25519 signature (64 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Signature([u8; 64]);

impl Signature {
    /// Create from bytes.
    #[must_use]
    pub fn from_bytes(bytes: [u8; 64]) -> Self {
        Self(bytes)
    }

    /// Get raw bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 64] {
        self.0
    }
}

/// The node's Ed25519 keypair, used to sign every outbound reply envelope.
pub struct NodeKeyPair {
    signing_key: SigningKey,
}

impl NodeKeyPair {
    /// Generate a random keypair.
    #[must_use]
    pub fn generate() -> Self {
        let signing_key = SigningKey::generate(&mut rand::thread_rng());
        Self { signing_key }
    }

    /// Create from a secret seed (32 bytes).
    #[must_use]
    pub fn from_seed(seed: [u8; 32]) -> Self {
        let signing_key = SigningKey::from_bytes(&seed);
        Self { signing_key }
    }

    /// The public half of the keypair.
    #[must_use]
    pub fn verify_key(&self) -> VerifyKey {
        VerifyKey(self.signing_key.verifying_key().to_bytes())
    }

    /// Sign a message (deterministic, no RNG needed).
    #[must_use]
    pub fn sign(&self, message: &[u8]) -> Signature {
        Signature(self.signing_key.sign(message).to_bytes())
    }

    /// Get the secret seed (for persistence).
    #[must_use]
    pub fn to_seed(&self) -> [u8; 32] {
        self.signing_key.to_bytes()
    }
}

impl Drop for NodeKeyPair {
    fn drop(&mut self) {
        // Zeroize secret key material
        let mut bytes = self.signing_key.to_bytes();
        bytes.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_verify() {
        let keypair = NodeKeyPair::generate();
        let message = b"signed management request";

        let signature = keypair.sign(message);
        let result = keypair.verify_key().verify(message, &signature);

        assert!(result.is_ok());
    }

    #[test]
    fn test_wrong_message_fails() {
        let keypair = NodeKeyPair::generate();

        let signature = keypair.sign(b"message1");
        let result = keypair.verify_key().verify(b"message2", &signature);

        assert_eq!(result, Err(CryptoError::SignatureVerificationFailed));
    }

    #[test]
    fn test_wrong_key_fails() {
        let keypair1 = NodeKeyPair::generate();
        let keypair2 = NodeKeyPair::generate();
        let message = b"test";

        let signature = keypair1.sign(message);
        let result = keypair2.verify_key().verify(message, &signature);

        assert!(result.is_err());
    }

    #[test]
    fn test_hex_identity_round_trip() {
        let keypair = NodeKeyPair::generate();
        let encoded = keypair.verify_key().to_hex();

        assert_eq!(encoded.len(), 64);
        let decoded = VerifyKey::from_hex(&encoded).unwrap();
        assert_eq!(decoded, keypair.verify_key());
    }

    #[test]
    fn test_invalid_hex_is_rejected() {
        assert_eq!(
            VerifyKey::from_hex("not hex at all"),
            Err(CryptoError::InvalidHexEncoding)
        );
        // Valid hex, wrong length
        assert_eq!(
            VerifyKey::from_hex("abcd"),
            Err(CryptoError::InvalidHexEncoding)
        );
    }

    #[test]
    fn test_deterministic_signatures() {
        let keypair = NodeKeyPair::from_seed([0xAB; 32]);
        let message = b"deterministic test";

        let sig1 = keypair.sign(message);
        let sig2 = keypair.sign(message);

        assert_eq!(sig1.to_bytes(), sig2.to_bytes());
    }

    #[test]
    fn test_roundtrip_seed() {
        let original = NodeKeyPair::generate();
        let seed = original.to_seed();
        let restored = NodeKeyPair::from_seed(seed);

        assert_eq!(original.verify_key(), restored.verify_key());
    }
}
