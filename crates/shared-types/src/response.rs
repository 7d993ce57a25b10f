//! # Outbound Response Shape
//!
//! Every handler result, success or sanitized error, is reduced to a
//! `{status_code, content}` pair before it is wrapped in a reply envelope.

use serde::{Deserialize, Serialize};

/// The caller-visible result of one dispatched message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeResponse {
    /// HTTP-style status classification: 200 success, 400 invalid request,
    /// 403 authorization, 404 not-found, 409 conflict, 500 unknown.
    pub status_code: u16,
    /// Result payload (object or sequence) or a one-line error object.
    pub content: serde_json::Value,
}

impl NodeResponse {
    /// Successful response with an arbitrary payload.
    #[must_use]
    pub fn ok(content: serde_json::Value) -> Self {
        Self {
            status_code: 200,
            content,
        }
    }

    /// Successful response carrying only a human-readable message.
    #[must_use]
    pub fn message(msg: impl Into<String>) -> Self {
        Self::ok(serde_json::json!({ "msg": msg.into() }))
    }

    /// Error response with a one-line message.
    #[must_use]
    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            content: serde_json::json!({ "error": message.into() }),
        }
    }
}
