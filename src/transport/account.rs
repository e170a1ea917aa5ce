use serde::Deserialize;
use serde_json::Value;

use super::wire::{Reply, TransportAmount, TransportError, provider_error};

#[derive(Debug, Clone, Deserialize)]
struct BalanceJsonResponse {
    #[serde(default)]
    balance: Option<TransportAmount>,
    #[serde(default)]
    error_code: Option<Value>,
    #[serde(default)]
    error_msg: Option<Value>,
}

pub fn decode_balance_json_response(json: &str) -> Result<Reply<f64>, TransportError> {
    let parsed: BalanceJsonResponse = serde_json::from_str(json)?;
    match parsed.balance {
        Some(balance) => Ok(Reply::Ok(balance.into_f64("balance")?)),
        None => Ok(Reply::Error(provider_error(
            parsed.error_code,
            parsed.error_msg,
        ))),
    }
}
