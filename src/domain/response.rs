use std::fmt;

use serde_json::{Map, Value};

use crate::domain::value::{ErrorCode, PhoneNumber, RequestId};

/// A number reserved by `get-number`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RentedNumber {
    pub request_id: RequestId,
    pub number: PhoneNumber,
}

/// Country or service catalog, keyed by identifier.
///
/// Entries are passed through as returned by sms-man.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog(Map<String, Value>);

impl Catalog {
    pub fn new(entries: Map<String, Value>) -> Self {
        Self(entries)
    }

    pub fn get(&self, id: &str) -> Option<&Value> {
        self.0.get(id)
    }

    /// The `title` field of an entry, when the provider sends one.
    pub fn title(&self, id: &str) -> Option<&str> {
        self.get(id)?.get("title")?.as_str()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Availability reported by `limits`, passed through unparsed.
#[derive(Debug, Clone, PartialEq)]
pub struct Limits(Value);

impl Limits {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

/// Error payload returned by sms-man instead of the expected fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderError {
    pub code: Option<ErrorCode>,
    pub message: Option<String>,
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, &self.message) {
            (Some(code), Some(message)) => write!(f, "{message} ({code})"),
            (None, Some(message)) => f.write_str(message),
            (Some(code), None) => write!(f, "({code})"),
            (None, None) => f.write_str("no error message"),
        }
    }
}
