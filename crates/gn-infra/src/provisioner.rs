//! # Background Provisioner
//!
//! Owns the worker status-transition contract. Each deploy or destroy
//! request becomes a spawned task; the dispatch path never waits for a
//! provider. Cancellation is signalled through a watch channel and is
//! best-effort: a task that has already finished its provider call wins
//! the race and commits its transition.

use crate::provider::{Provider, ProvisionError};
use gn_store::WorkerManager;
use shared_types::{Worker, WorkerStatus};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Hands provisioning work to background tasks and commits the resulting
/// status transitions.
pub struct Provisioner {
    provider: Arc<dyn Provider>,
    workers: Arc<WorkerManager>,
    cancel_tx: watch::Sender<bool>,
}

impl Provisioner {
    pub fn new(provider: Arc<dyn Provider>, workers: Arc<WorkerManager>) -> Self {
        let (cancel_tx, _) = watch::channel(false);
        Self {
            provider,
            workers,
            cancel_tx,
        }
    }

    /// Signal every in-flight task to stop. Best-effort: tasks already past
    /// their provider call commit normally.
    pub fn shutdown(&self) {
        let _ = self.cancel_tx.send(true);
    }

    /// Spawn the deploy flow for a pending worker. Returns immediately;
    /// the task commits `pending -> deployed` or `pending -> failed` as a
    /// single atomic update.
    pub fn spawn_deploy(&self, worker: Worker) -> JoinHandle<()> {
        let provider = Arc::clone(&self.provider);
        let workers = Arc::clone(&self.workers);
        let mut cancel_rx = self.cancel_tx.subscribe();

        tokio::spawn(async move {
            let id = worker.id;
            let outcome = tokio::select! {
                result = provider.deploy(&worker) => result,
                _ = cancel_rx.changed() => {
                    info!(worker_id = %id, "deploy cancelled before completion");
                    Err(ProvisionError::ApplyFailed("cancelled".into()))
                }
            };

            let transition = match outcome {
                Ok(output) => {
                    info!(worker_id = %id, outputs = %output.outputs, "worker deployed");
                    workers.transition(
                        id,
                        WorkerStatus::Pending,
                        WorkerStatus::Deployed,
                        Some(unix_now()),
                    )
                }
                Err(err) => {
                    warn!(worker_id = %id, %err, "worker deploy failed");
                    workers.transition(id, WorkerStatus::Pending, WorkerStatus::Failed, None)
                }
            };

            if let Err(err) = transition {
                error!(worker_id = %id, %err, "could not commit worker status transition");
            }
        })
    }

    /// Spawn the destroy flow. On success the task commits
    /// `deployed -> destroyed` as a single atomic update; a worker that is
    /// no longer in `deployed` keeps its status and the mismatch is logged.
    /// On provider failure the worker keeps its previous status.
    pub fn spawn_destroy(&self, worker: Worker) -> JoinHandle<()> {
        let provider = Arc::clone(&self.provider);
        let workers = Arc::clone(&self.workers);
        let mut cancel_rx = self.cancel_tx.subscribe();

        tokio::spawn(async move {
            let id = worker.id;
            let outcome = tokio::select! {
                result = provider.destroy(&worker) => result,
                _ = cancel_rx.changed() => {
                    info!(worker_id = %id, "destroy cancelled before completion");
                    Err(ProvisionError::DestroyFailed("cancelled".into()))
                }
            };

            match outcome {
                Ok(()) => {
                    let committed = workers.transition(
                        id,
                        WorkerStatus::Deployed,
                        WorkerStatus::Destroyed,
                        None,
                    );
                    match committed {
                        Ok(_) => info!(worker_id = %id, "worker destroyed"),
                        Err(err) => {
                            error!(worker_id = %id, %err, "could not commit destroyed status");
                        }
                    }
                }
                Err(err) => warn!(worker_id = %id, %err, "worker destroy failed"),
            }
        })
    }
}
