use serde_json::{Map, Value};

use super::wire::{Reply, TransportError, provider_error};
use crate::domain::{Catalog, Limits};

/// Every catalog the provider serves contains the entry with id `1`; its
/// absence means the body is an error payload.
const CATALOG_MARKER_KEY: &str = "1";

pub fn decode_catalog_json_response(json: &str) -> Result<Reply<Catalog>, TransportError> {
    let parsed: Map<String, Value> = serde_json::from_str(json)?;
    if parsed.contains_key(CATALOG_MARKER_KEY) {
        return Ok(Reply::Ok(Catalog::new(parsed)));
    }
    Ok(Reply::Error(provider_error(
        parsed.get("error_code").cloned(),
        parsed.get("error_msg").cloned(),
    )))
}

/// Limits are passed through; provider error payloads are not interpreted.
pub fn decode_limits_json_response(json: &str) -> Result<Limits, TransportError> {
    let parsed: Value = serde_json::from_str(json)?;
    Ok(Limits::new(parsed))
}
