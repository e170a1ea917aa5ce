use serde::Deserialize;
use serde_json::Value;

use crate::domain::{ErrorCode, ProviderError};

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response field {field} has an invalid value: {value:?}")]
    InvalidField { field: &'static str, value: String },
}

/// Decoded provider reply: either the expected payload or the error fields that
/// replaced it.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    Ok(T),
    Error(ProviderError),
}

/// Identifier-like value sent by sms-man as either JSON string or JSON number.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TransportId {
    String(String),
    Number(serde_json::Number),
}

impl TransportId {
    pub fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

/// Money-like value sent by sms-man as either JSON number or numeric string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TransportAmount {
    Number(f64),
    String(String),
}

impl TransportAmount {
    pub fn into_f64(self, field: &'static str) -> Result<f64, TransportError> {
        match self {
            Self::Number(value) => Ok(value),
            Self::String(value) => {
                value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| TransportError::InvalidField { field, value })
            }
        }
    }
}

/// Error fields are read leniently: any JSON value is accepted and rendered as
/// text, so an odd error shape is still classified instead of failing to decode.
fn error_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

pub fn provider_error(error_code: Option<Value>, error_msg: Option<Value>) -> ProviderError {
    ProviderError {
        code: error_text(error_code).map(ErrorCode::new),
        message: error_text(error_msg),
    }
}
