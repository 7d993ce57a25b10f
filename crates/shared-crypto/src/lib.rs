//! # Shared Crypto Crate
//!
//! Ed25519 signing and verification for GridNode. Exposes exactly the
//! primitives the dispatch layer needs: a node keypair, a verify key with a
//! hex-encoded identity form, and detached 64-byte signatures.
//!
//! ## Security Properties
//!
//! - Deterministic nonces (no RNG dependency at signing time)
//! - Secret key material is zeroized on drop
//! - Verify keys are validated as curve points on construction

pub mod errors;
pub mod signatures;

pub use errors::CryptoError;
pub use signatures::{NodeKeyPair, Signature, VerifyKey};
