//! Mapping of HTTP failures onto `RequestError`

use serde::Deserialize;
use serde_json::Value;

use core_kernel::RequestError;

/// Error body returned by the backend on non-success statuses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<Value>,
}

/// Extracts the server's `detail` from an error body
///
/// A string detail is returned verbatim; any other JSON value (validation
/// error lists, objects) is rendered as compact JSON. Returns `None` when the
/// body is empty, not JSON, or carries no detail.
pub fn extract_detail(body: &[u8]) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_slice(body).ok()?;
    match parsed.detail? {
        Value::Null => None,
        Value::String(detail) => Some(detail),
        other => Some(other.to_string()),
    }
}

/// Maps a reqwest failure to a transport or decode error
pub fn from_reqwest(error: reqwest::Error) -> RequestError {
    if error.is_decode() {
        return RequestError::decode(error.to_string());
    }

    let message = if error.is_connect() {
        "Connection failed"
    } else if error.is_builder() {
        "Invalid request"
    } else {
        "Request failed"
    };
    RequestError::transport_from(message, error)
}
