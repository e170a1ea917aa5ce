use serde::Deserialize;
use serde_json::Value;

use super::wire::{Reply, TransportError, TransportId, provider_error};
use crate::domain::SmsCode;

#[derive(Debug, Clone, Deserialize)]
struct GetSmsJsonResponse {
    #[serde(default)]
    sms_code: Option<TransportId>,
    #[serde(default)]
    error_code: Option<Value>,
    #[serde(default)]
    error_msg: Option<Value>,
}

pub fn decode_get_sms_json_response(json: &str) -> Result<Reply<SmsCode>, TransportError> {
    let parsed: GetSmsJsonResponse = serde_json::from_str(json)?;
    match parsed.sms_code {
        Some(code) => Ok(Reply::Ok(SmsCode::new(code.into_string()))),
        None => Ok(Reply::Error(provider_error(
            parsed.error_code,
            parsed.error_msg,
        ))),
    }
}
