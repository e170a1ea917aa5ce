use crate::domain::{
    CountryId, GetLimits, GetSms, NumberStatus, RequestId, RequestNumber, ServiceId, SetStatus,
    Token,
};

/// Parameters shared by every call. A fresh copy is built for each request.
pub fn encode_base_query(token: &Token) -> Vec<(String, String)> {
    vec![(Token::FIELD.to_owned(), token.as_str().to_owned())]
}

/// Adds `field=value` only when a non-empty value is present.
fn push_optional(params: &mut Vec<(String, String)>, field: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|value| !value.is_empty()) {
        params.push((field.to_owned(), value.to_owned()));
    }
}

pub fn encode_limits_query(request: &GetLimits) -> Vec<(String, String)> {
    let mut params = Vec::new();
    push_optional(
        &mut params,
        CountryId::FIELD,
        request.country_id().map(CountryId::as_str),
    );
    push_optional(
        &mut params,
        ServiceId::FIELD,
        request.service_id().map(ServiceId::as_str),
    );
    params
}

pub fn encode_get_number_query(request: &RequestNumber) -> Vec<(String, String)> {
    let mut params = Vec::new();
    push_optional(
        &mut params,
        CountryId::FIELD,
        Some(request.country_id().as_str()),
    );
    push_optional(
        &mut params,
        ServiceId::FIELD,
        Some(request.service_id().as_str()),
    );
    params
}

pub fn encode_get_sms_query(request: &GetSms) -> Vec<(String, String)> {
    let mut params = Vec::new();
    push_optional(
        &mut params,
        RequestId::FIELD,
        Some(request.request_id().as_str()),
    );
    params
}

pub fn encode_set_status_query(request: &SetStatus) -> Vec<(String, String)> {
    let mut params = Vec::new();
    push_optional(
        &mut params,
        RequestId::FIELD,
        Some(request.request_id().as_str()),
    );
    push_optional(
        &mut params,
        NumberStatus::FIELD,
        Some(request.status().as_str()),
    );
    params
}
