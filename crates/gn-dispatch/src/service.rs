//! # Node Service
//!
//! The single entry point of the dispatch subsystem: one verified envelope
//! in, one signed reply envelope out. Every failure mode inside the
//! pipeline ends as a sanitized `NodeResponse`; only a failure to sign the
//! reply itself surfaces as an error to the transport.

use gn_store::{RoleManager, UserManager, WorkerManager};
use shared_types::SignedEnvelope;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

use crate::auth::AuthorizationGuard;
use crate::boundary;
use crate::domain::context::RequestContext;
use crate::ports::outbound::InfraGateway;
use crate::router;
use crate::signer::{ResponseSigner, SignerError};

/// Shared state every handler sees.
pub struct NodeContext {
    pub roles: Arc<RoleManager>,
    pub users: Arc<UserManager>,
    pub workers: Arc<WorkerManager>,
    pub guard: AuthorizationGuard,
    pub infra: Arc<dyn InfraGateway>,
}

/// Failure to produce a reply envelope at all.
#[derive(Debug, Error)]
pub enum NodeError {
    #[error(transparent)]
    Signing(#[from] SignerError),
}

/// Verifies, routes, sanitizes, and signs.
pub struct NodeService {
    context: NodeContext,
    signer: ResponseSigner,
}

impl NodeService {
    pub fn new(context: NodeContext, signer: ResponseSigner) -> Self {
        Self { context, signer }
    }

    pub fn context(&self) -> &NodeContext {
        &self.context
    }

    /// Process one inbound envelope and return the signed reply.
    pub async fn handle(&self, envelope: SignedEnvelope) -> Result<SignedEnvelope, NodeError> {
        let response = match crate::signer::verify_envelope(&envelope) {
            Err(err) => boundary::reject_envelope(&err),
            Ok(signer_key) => {
                let result = match RequestContext::from_envelope(&envelope, signer_key) {
                    Err(domain) => Err(domain.into()),
                    Ok(ctx) => {
                        router::route(&self.context, &ctx, envelope.msg_type, &envelope.content)
                            .await
                    }
                };
                boundary::sanitize(result, envelope.msg_type, envelope.correlation_id)
            }
        };

        debug!(
            msg_type = ?envelope.msg_type,
            correlation_id = %envelope.correlation_id,
            status = response.status_code,
            "sealing reply"
        );
        let content = serde_json::to_value(&response).map_err(SignerError::Serialization)?;
        let reply = self.signer.seal(
            envelope.msg_type,
            content,
            envelope.reply_to.clone(),
            envelope.correlation_id,
        )?;
        Ok(reply)
    }
}
