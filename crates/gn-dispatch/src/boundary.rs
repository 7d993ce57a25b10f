//! # Exception Sanitization Boundary
//!
//! The single point where handler failures become caller-visible text.
//! Domain errors cross with their message and status intact; anything else
//! is logged with its full chain and replaced by the fixed generic message,
//! so internal details never reach the wire.

use shared_types::{MessageError, MessageType, NodeResponse, UNKNOWN_INTERNAL_MESSAGE};
use tracing::{error, warn};
use uuid::Uuid;

use crate::domain::error::DispatchError;

/// Reduce a handler outcome to the response the caller may see.
pub fn sanitize(
    result: Result<NodeResponse, DispatchError>,
    msg_type: MessageType,
    correlation_id: Uuid,
) -> NodeResponse {
    match result {
        Ok(response) => response,
        Err(DispatchError::Domain(domain)) => {
            warn!(
                ?msg_type,
                %correlation_id,
                error = %domain,
                "request rejected"
            );
            NodeResponse::error(domain.status_code(), domain.to_string())
        }
        Err(DispatchError::Internal(internal)) => {
            error!(
                ?msg_type,
                %correlation_id,
                error = ?internal,
                "internal error sanitized"
            );
            NodeResponse::error(500, UNKNOWN_INTERNAL_MESSAGE)
        }
    }
}

/// Response for an envelope that never reached a handler: bad version,
/// bad signer key, or a signature mismatch.
pub fn reject_envelope(err: &MessageError) -> NodeResponse {
    warn!(error = %err, "envelope rejected");
    NodeResponse::error(400, err.to_string())
}
