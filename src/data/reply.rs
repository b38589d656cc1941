use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Outcome of a call to the remote services: the payload, or the message the service
/// (or an undecodable body) produced instead.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiReply<T> {
    Ok(T),
    Error(String),
}

impl<T> ApiReply<T> {
    pub fn is_ok(&self) -> bool {
        matches!(self, ApiReply::Ok(_))
    }

    pub fn ok(self) -> Option<T> {
        match self {
            ApiReply::Ok(payload) => Some(payload),
            ApiReply::Error(_) => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiReply<U> {
        match self {
            ApiReply::Ok(payload) => ApiReply::Ok(f(payload)),
            ApiReply::Error(msg) => ApiReply::Error(msg),
        }
    }

    /// Turn a remote error into an `anyhow` error, for callers that cannot continue without the payload.
    pub fn into_result(self) -> Result<T> {
        match self {
            ApiReply::Ok(payload) => Ok(payload),
            ApiReply::Error(msg) => Err(anyhow::anyhow!(msg)),
        }
    }
}

/// Decode a raw response body.
///
/// Bodies that are a JSON string holding JSON (double-encoded) are unwrapped once. A body that
/// is not JSON at all becomes `Error(<body>)`, and an object carrying a non-empty `error` field
/// becomes `Error(<that message>)`.
pub fn decode_body(text: &str) -> ApiReply<Value> {
    let parsed = match serde_json::from_str::<Value>(text) {
        Ok(Value::String(inner)) => serde_json::from_str::<Value>(&inner),
        other => other,
    };

    let value = match parsed {
        Ok(value) => value,
        Err(_) => return ApiReply::Error(text.to_string()),
    };

    match value.get("error") {
        Some(error) if is_truthy(error) => match error {
            Value::String(msg) => ApiReply::Error(msg.clone()),
            other => ApiReply::Error(other.to_string()),
        },
        _ => ApiReply::Ok(value),
    }
}

/// `null`, `false`, `0` and `""` do not count as an error marker.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Decode a body and deserialize a successful payload into `T`.
/// A payload that does not have the expected shape is a hard error, not a remote message.
pub fn decode_typed<T: DeserializeOwned>(text: &str) -> Result<ApiReply<T>> {
    match decode_body(text) {
        ApiReply::Ok(value) => {
            let payload = serde_json::from_value(value).context("Unexpected reply shape")?;
            Ok(ApiReply::Ok(payload))
        }
        ApiReply::Error(msg) => Ok(ApiReply::Error(msg)),
    }
}
