use serde::Deserialize;
use serde_json::Value;

use super::wire::{Reply, TransportError, TransportId, provider_error};
use crate::domain::{PhoneNumber, RentedNumber, RequestId};

#[derive(Debug, Clone, Deserialize)]
struct GetNumberJsonResponse {
    #[serde(default)]
    request_id: Option<TransportId>,
    #[serde(default)]
    number: Option<TransportId>,
    #[serde(default)]
    error_code: Option<Value>,
    #[serde(default)]
    error_msg: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
struct SetStatusJsonResponse {
    #[serde(default)]
    success: Option<Value>,
    #[serde(default)]
    error_code: Option<Value>,
    #[serde(default)]
    error_msg: Option<Value>,
}

/// A rental succeeds only when both `request_id` and `number` are present.
pub fn decode_get_number_json_response(json: &str) -> Result<Reply<RentedNumber>, TransportError> {
    let parsed: GetNumberJsonResponse = serde_json::from_str(json)?;
    match (parsed.request_id, parsed.number) {
        (Some(request_id), Some(number)) => {
            let request_id = request_id.into_string();
            let number = number.into_string();
            Ok(Reply::Ok(RentedNumber {
                request_id: RequestId::new(request_id.clone()).map_err(|_| {
                    TransportError::InvalidField {
                        field: RequestId::FIELD,
                        value: request_id,
                    }
                })?,
                number: PhoneNumber::new(number.clone()).map_err(|_| {
                    TransportError::InvalidField {
                        field: PhoneNumber::FIELD,
                        value: number,
                    }
                })?,
            }))
        }
        _ => Ok(Reply::Error(provider_error(
            parsed.error_code,
            parsed.error_msg,
        ))),
    }
}

pub fn decode_set_status_json_response(json: &str) -> Result<Reply<()>, TransportError> {
    let parsed: SetStatusJsonResponse = serde_json::from_str(json)?;
    if parsed.success == Some(Value::Bool(true)) {
        return Ok(Reply::Ok(()));
    }
    Ok(Reply::Error(provider_error(
        parsed.error_code,
        parsed.error_msg,
    )))
}
