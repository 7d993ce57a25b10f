//! # Runtime Wiring
//!
//! Builds the full node out of its subsystems: store, resource managers,
//! authorization guard, provisioner, and the dispatch service, then owns
//! graceful shutdown.

use gn_dispatch::adapters::infra::ProvisionerGateway;
use gn_dispatch::{AuthorizationGuard, NodeContext, NodeService, ResponseSigner};
use gn_infra::{LocalProvider, Provisioner};
use gn_store::{EntityStore, ManagerError, MemoryStore, ResourceManager, StoreError};
use shared_crypto::NodeKeyPair;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

use crate::bootstrap::ensure_owner;
use crate::config::{ConfigError, NodeConfig};

/// Failures while assembling or bootstrapping the node.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("bootstrap failed: {0}")]
    Bootstrap(#[from] ManagerError),
}

/// The assembled node.
pub struct NodeRuntime {
    service: Arc<NodeService>,
    provisioner: Arc<Provisioner>,
    keypair: Arc<NodeKeyPair>,
}

impl NodeRuntime {
    /// Build and bootstrap a node from configuration.
    pub fn build(config: &NodeConfig) -> Result<Self, RuntimeError> {
        let keypair = Arc::new(match config.signing_seed {
            Some(seed) => NodeKeyPair::from_seed(seed),
            None => NodeKeyPair::generate(),
        });
        info!(verify_key = %keypair.verify_key().to_hex(), "node identity ready");

        let store = open_store(config)?;
        let roles = Arc::new(ResourceManager::new(store.clone()));
        let users = Arc::new(ResourceManager::new(store.clone()));
        let workers = Arc::new(ResourceManager::new(store));
        let guard = AuthorizationGuard::new(Arc::clone(&users), Arc::clone(&roles));

        let provisioner = Arc::new(Provisioner::new(
            Arc::new(LocalProvider),
            Arc::clone(&workers),
        ));
        let context = NodeContext {
            roles,
            users,
            workers,
            guard,
            infra: Arc::new(ProvisionerGateway::new(Arc::clone(&provisioner))),
        };

        let owner_key = config
            .owner_verify_key
            .clone()
            .unwrap_or_else(|| keypair.verify_key().to_hex());
        ensure_owner(&context, &config.owner_role_name, &owner_key)?;

        let signer = ResponseSigner::new(Arc::clone(&keypair));
        let service = Arc::new(NodeService::new(context, signer));

        Ok(Self {
            service,
            provisioner,
            keypair,
        })
    }

    /// The dispatch entry point.
    pub fn service(&self) -> Arc<NodeService> {
        Arc::clone(&self.service)
    }

    /// Hex verify key identifying this node's replies.
    pub fn verify_key_hex(&self) -> String {
        self.keypair.verify_key().to_hex()
    }

    /// Cancel in-flight provisioning tasks and stop.
    pub fn shutdown(&self) {
        info!("initiating graceful shutdown");
        self.provisioner.shutdown();
    }
}

#[cfg(feature = "rocksdb")]
fn open_store(config: &NodeConfig) -> Result<Arc<dyn EntityStore>, StoreError> {
    match &config.data_dir {
        Some(dir) => {
            info!(data_dir = %dir.display(), "opening persistent store");
            Ok(Arc::new(gn_store::RocksStore::open(dir)?))
        }
        None => Ok(Arc::new(MemoryStore::new())),
    }
}

#[cfg(not(feature = "rocksdb"))]
fn open_store(_config: &NodeConfig) -> Result<Arc<dyn EntityStore>, StoreError> {
    Ok(Arc::new(MemoryStore::new()))
}
