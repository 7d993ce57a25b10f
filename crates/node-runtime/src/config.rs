//! # Node Configuration
//!
//! Environment-driven configuration with defaults suitable for local
//! development. Every knob is a `GRIDNODE_*` variable; a malformed value is
//! a startup error, never a silent default.

use shared_crypto::VerifyKey;
use std::path::PathBuf;
use thiserror::Error;

/// Complete node configuration.
#[derive(Debug, Clone, Default)]
pub struct NodeConfig {
    /// 32-byte Ed25519 signing seed. When absent a fresh keypair is
    /// generated at startup and the node identity does not survive a
    /// restart.
    pub signing_seed: Option<[u8; 32]>,
    /// Hex verify key of the owner user created at bootstrap. Defaults to
    /// the node's own verify key.
    pub owner_verify_key: Option<String>,
    /// Name of the bootstrap owner role.
    pub owner_role_name: String,
    /// Data directory for the persistent store. Ignored unless the
    /// `rocksdb` feature is enabled.
    pub data_dir: Option<PathBuf>,
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `GRIDNODE_SIGNING_SEED` is not 64 hex characters.
    #[error("GRIDNODE_SIGNING_SEED must be 32 bytes (64 hex chars)")]
    InvalidSigningSeed,

    /// `GRIDNODE_OWNER_KEY` is not a valid Ed25519 verify key.
    #[error("GRIDNODE_OWNER_KEY is not a valid hex verify key")]
    InvalidOwnerKey,
}

impl NodeConfig {
    /// Load configuration from `GRIDNODE_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self {
            owner_role_name: "Owner".to_owned(),
            ..Self::default()
        };

        if let Ok(seed_hex) = std::env::var("GRIDNODE_SIGNING_SEED") {
            let raw = hex::decode(&seed_hex).map_err(|_| ConfigError::InvalidSigningSeed)?;
            let seed: [u8; 32] = raw
                .try_into()
                .map_err(|_| ConfigError::InvalidSigningSeed)?;
            config.signing_seed = Some(seed);
        }

        if let Ok(owner_key) = std::env::var("GRIDNODE_OWNER_KEY") {
            VerifyKey::from_hex(&owner_key).map_err(|_| ConfigError::InvalidOwnerKey)?;
            config.owner_verify_key = Some(owner_key);
        }

        if let Ok(role_name) = std::env::var("GRIDNODE_OWNER_ROLE") {
            if !role_name.is_empty() {
                config.owner_role_name = role_name;
            }
        }

        if let Ok(data_dir) = std::env::var("GRIDNODE_DATA_DIR") {
            config.data_dir = Some(PathBuf::from(data_dir));
        }

        Ok(config)
    }
}
