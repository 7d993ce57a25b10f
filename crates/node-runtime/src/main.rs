//! # GridNode Node Runtime
//!
//! The main entry point for the GridNode management node.
//!
//! ## Startup Sequence
//!
//! 1. Initialize logging (`RUST_LOG` controls the filter)
//! 2. Load configuration from `GRIDNODE_*` environment variables
//! 3. Open the store and wire managers, guard, and provisioner
//! 4. Bootstrap the owner role and owner user
//! 5. Run until interrupted, then cancel in-flight provisioning

use anyhow::Result;
use node_runtime::{NodeConfig, NodeRuntime};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_target(true)
        .init();

    let config = NodeConfig::from_env()?;
    let runtime = NodeRuntime::build(&config)?;

    info!("===========================================");
    info!("  GridNode Node Runtime v0.1.0");
    info!("  Verify key: {}", runtime.verify_key_hex());
    info!("===========================================");
    info!("Node is running. Press Ctrl+C to stop.");

    tokio::signal::ctrl_c().await?;
    runtime.shutdown();

    Ok(())
}
