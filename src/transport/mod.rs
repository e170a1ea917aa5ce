//! Transport layer: query encoding and wire-format details (deserialization).

mod account;
mod catalog;
mod number;
mod params;
mod sms;
mod wire;

pub use account::decode_balance_json_response;
pub use catalog::{decode_catalog_json_response, decode_limits_json_response};
pub use number::{decode_get_number_json_response, decode_set_status_json_response};
pub use params::{
    encode_base_query, encode_get_number_query, encode_get_sms_query, encode_limits_query,
    encode_set_status_query,
};
pub use sms::decode_get_sms_json_response;
pub use wire::{Reply, TransportError};
