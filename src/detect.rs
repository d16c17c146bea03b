// Error detection for iiko responses
// Any response may carry `errorDescription`, whatever its HTTP status.

use serde_json::{Map, Value};

use crate::error::DomainError;

struct ErrorEnvelope {
    error_description: String,
    correlation_id: Option<String>,
}

fn envelope(body: &[u8]) -> Option<ErrorEnvelope> {
    // Only objects; other fields never suppress a present description
    let object = serde_json::from_slice::<Map<String, Value>>(body).ok()?;
    let error_description = object
        .get("errorDescription")
        .and_then(Value::as_str)
        .filter(|d| !d.is_empty())?
        .to_string();
    let correlation_id = object
        .get("correlationId")
        .and_then(Value::as_str)
        .map(String::from);

    Some(ErrorEnvelope {
        error_description,
        correlation_id,
    })
}

/// Extract a non-empty `errorDescription` from a response body.
///
/// Bodies that are not JSON objects report no error; decoding them into the
/// expected shape fails separately.
pub fn detect_api_error(body: &[u8]) -> Option<String> {
    envelope(body).map(|env| env.error_description)
}

/// Build a [`DomainError`] for a body that carries an error description
pub fn domain_error(body: &[u8], status: u16, keep_raw: bool) -> Option<DomainError> {
    let env = envelope(body)?;

    Some(DomainError {
        description: env.error_description,
        status: Some(status),
        correlation_id: env.correlation_id,
        raw: keep_raw.then(|| String::from_utf8_lossy(body).into_owned()),
    })
}
