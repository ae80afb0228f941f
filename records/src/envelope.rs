//! Response envelopes.
//!
//! The server always answers `{"data": ...}`, but the console also talks to
//! back-ends that return bare values or nest payloads under a
//! resource-named key (`{"vendor": {...}}`, `{"vendors": [...]}`). Decoding
//! accepts all of these; the first matching key wins in the order `data`,
//! singular key, plural key, collection path, then the bare body.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::resource::Resource;

/// Error returned when a response body does not hold the expected payload.
#[derive(Debug, thiserror::Error)]
pub enum RecordError {
    /// The body was not valid JSON.
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
    /// The payload under `key` did not match the expected shape.
    #[error("unexpected payload under `{key}`: {source}")]
    Shape {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Success envelope: `{"data": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Error body: `{"error": "..."}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: message.into() }
    }
}

/// Keys a response for `R` may be nested under, in preference order.
#[must_use]
pub fn envelope_keys<R: Resource>() -> Vec<String> {
    let mut keys = vec!["data".to_owned(), R::KEY.to_owned(), format!("{}s", R::KEY), R::PATH.to_owned()];
    keys.dedup();
    keys
}

/// Extract a `T` from `body`, looking under `keys` first and falling back to
/// the bare body.
///
/// # Errors
///
/// Returns [`RecordError::Shape`] when the selected payload does not
/// deserialize as `T`.
pub fn unwrap_envelope<T: DeserializeOwned>(body: Value, keys: &[String]) -> Result<T, RecordError> {
    if let Value::Object(mut map) = body {
        for key in keys {
            if let Some(inner) = map.remove(key.as_str()) {
                return serde_json::from_value(inner).map_err(|source| RecordError::Shape { key: key.clone(), source });
            }
        }
        return serde_json::from_value(Value::Object(map))
            .map_err(|source| RecordError::Shape { key: String::new(), source });
    }
    serde_json::from_value(body).map_err(|source| RecordError::Shape { key: String::new(), source })
}

/// Decode a single-record response for `R`.
///
/// # Errors
///
/// Returns an error if the body is not JSON or holds no `R`.
pub fn decode_one<R: Resource>(raw: &str) -> Result<R, RecordError> {
    let body: Value = serde_json::from_str(raw)?;
    unwrap_envelope(body, &envelope_keys::<R>())
}

/// Decode a list response for `R`.
///
/// # Errors
///
/// Returns an error if the body is not JSON or holds no list of `R`.
pub fn decode_list<R: Resource>(raw: &str) -> Result<Vec<R>, RecordError> {
    let body: Value = serde_json::from_str(raw)?;
    unwrap_envelope(body, &envelope_keys::<R>())
}

/// Pull a human-readable message out of an error response body.
///
/// Falls back to the raw text (trimmed) when the body is not an [`ErrorBody`].
#[must_use]
pub fn error_message(raw: &str) -> Option<String> {
    if let Ok(body) = serde_json::from_str::<ErrorBody>(raw) {
        return Some(body.error);
    }
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
