//! # Content-Key Extraction
//!
//! Every inbound content payload is a JSON object with well-known string
//! keys. Handlers ignore unrecognized keys; a missing or empty required key
//! is `MissingRequestKey`, a present but malformed value is
//! `InvalidRequest`.

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared_types::DomainError;
use uuid::Uuid;

/// A required, non-empty string value.
pub fn require_str<'a>(content: &'a Value, key: &str) -> Result<&'a str, DomainError> {
    match content.get(key) {
        None | Some(Value::Null) => Err(DomainError::missing_key(key)),
        Some(Value::String(s)) if s.is_empty() => Err(DomainError::missing_key(key)),
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(DomainError::invalid(format!("key '{key}' must be a string"))),
    }
}

/// A required UUID value.
pub fn require_uuid(content: &Value, key: &str) -> Result<Uuid, DomainError> {
    let raw = require_str(content, key)?;
    Uuid::parse_str(raw)
        .map_err(|_| DomainError::invalid(format!("key '{key}' is not a valid id")))
}

/// An optional UUID value; absent and null are both `None`.
pub fn optional_uuid(content: &Value, key: &str) -> Result<Option<Uuid>, DomainError> {
    match content.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(_) => require_uuid(content, key).map(Some),
    }
}

/// Deserialize a typed payload out of the content object, ignoring
/// unrecognized keys.
pub fn parse_payload<T: DeserializeOwned>(content: &Value) -> Result<T, DomainError> {
    serde_json::from_value(content.clone())
        .map_err(|e| DomainError::invalid(e.to_string()))
}
