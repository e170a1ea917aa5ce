//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::domain::{
    Catalog, ErrorCode, GetLimits, GetSms, KnownErrorCode, Limits, ProviderError, RentedNumber,
    RequestNumber, SetStatus, SmsCode, Token, ValidationError,
};
use crate::transport::{Reply, TransportError};

mod bulk;

pub use bulk::BulkPolicy;

const DEFAULT_BASE_URL: &str = "http://api.sms-man.ru/control";

const BALANCE_PATH: &str = "/get-balance";
const LIMITS_PATH: &str = "/limits";
const GET_NUMBER_PATH: &str = "/get-number";
const GET_SMS_PATH: &str = "/get-sms";
const COUNTRIES_PATH: &str = "/countries";
const SERVICES_PATH: &str = "/applications";
const SET_STATUS_PATH: &str = "/set-status";

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        params: Vec<(String, String)>,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = self.client.get(url).query(&params).send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`SmsManClient`].
///
/// Provider failures are classified by which fields the JSON reply contains, never by
/// HTTP status. Each provider variant keeps the original `error_code`/`error_msg`.
pub enum SmsManError {
    /// The token was rejected, or the reply lacked the expected fields.
    #[error("wrong token or unexpected reply: {0}")]
    WrongToken(ProviderError),

    /// No SMS has arrived yet for the request id (or the id is unknown).
    #[error("SMS not received: {0}")]
    SmsNotReceived(ProviderError),

    /// The account balance is too low to rent a number.
    #[error("low balance: {0}")]
    LowBalance(ProviderError),

    /// No numbers are currently available for the country/service pair.
    #[error("no numbers available: {0}")]
    NoNumbers(ProviderError),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// Non-successful HTTP status code with a body that is not JSON.
    #[error("unexpected HTTP status: {status}")]
    HttpStatus { status: u16, body: Option<String> },

    /// Response body could not be parsed as the expected format.
    #[error("parse error: {0}")]
    Parse(#[source] Box<dyn StdError + Send + Sync>),

    /// One of the domain constructors rejected an invalid value.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The configured base URL is not a valid URL.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The blocking facade could not start its runtime.
    #[error("runtime error: {0}")]
    Runtime(#[source] std::io::Error),
}

impl SmsManError {
    /// Returns `true` when trying again later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::NoNumbers(_))
    }

    /// The provider payload behind a provider-classified error.
    pub fn provider_error(&self) -> Option<&ProviderError> {
        match self {
            Self::WrongToken(err)
            | Self::SmsNotReceived(err)
            | Self::LowBalance(err)
            | Self::NoNumbers(err) => Some(err),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`SmsManClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent or bulk policy.
pub struct SmsManClientBuilder {
    token: Token,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    bulk_policy: BulkPolicy,
}

impl SmsManClientBuilder {
    /// Create a builder with the default base URL, no timeout and the default bulk policy.
    pub fn new(token: Token) -> Self {
        Self {
            token,
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            bulk_policy: BulkPolicy::default(),
        }
    }

    /// Override the API root (`http://api.sms-man.ru/control`). Endpoint paths are appended.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Concurrency cap and retry budget used by [`SmsManClient::request_numbers`].
    pub fn bulk_policy(mut self, policy: BulkPolicy) -> Self {
        self.bulk_policy = policy;
        self
    }

    /// Build a [`SmsManClient`].
    pub fn build(self) -> Result<SmsManClient, SmsManError> {
        url::Url::parse(&self.base_url)?;

        // Connections are never kept between calls.
        let mut builder = reqwest::Client::builder().pool_max_idle_per_host(0);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }

        let client = builder
            .build()
            .map_err(|err| SmsManError::Transport(Box::new(err)))?;

        Ok(SmsManClient {
            token: self.token,
            base_url: self.base_url.trim_end_matches('/').to_owned(),
            bulk_policy: self.bulk_policy,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level sms-man client.
///
/// Every operation is a single GET against `<base_url><path>` carrying the token,
/// except [`SmsManClient::request_numbers`] which fans out `get-number` calls.
/// Nothing is cached between calls.
pub struct SmsManClient {
    token: Token,
    base_url: String,
    bulk_policy: BulkPolicy,
    http: Arc<dyn HttpTransport>,
}

impl SmsManClient {
    /// Create a client with the default settings.
    ///
    /// For more customization, use [`SmsManClient::builder`].
    pub fn new(token: Token) -> Result<Self, SmsManError> {
        Self::builder(token).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(token: Token) -> SmsManClientBuilder {
        SmsManClientBuilder::new(token)
    }

    /// Account balance in the account currency.
    ///
    /// Errors: [`SmsManError::WrongToken`] when the reply has no `balance` field.
    pub async fn balance(&self) -> Result<f64, SmsManError> {
        let response = self.get(BALANCE_PATH, Vec::new()).await?;
        match decode(response, crate::transport::decode_balance_json_response)? {
            Reply::Ok(balance) => Ok(balance),
            Reply::Error(err) => Err(SmsManError::WrongToken(err)),
        }
    }

    /// Available numbers per country and service, as returned by the provider.
    ///
    /// Error payloads are not interpreted and come back as JSON.
    pub async fn limits(&self, request: GetLimits) -> Result<Limits, SmsManError> {
        let response = self
            .get(
                LIMITS_PATH,
                crate::transport::encode_limits_query(&request),
            )
            .await?;
        decode(response, crate::transport::decode_limits_json_response)
    }

    /// Poll for the SMS code of a rented number.
    ///
    /// Errors: [`SmsManError::SmsNotReceived`] while no code is available.
    pub async fn sms_code(&self, request: GetSms) -> Result<SmsCode, SmsManError> {
        let response = self
            .get(
                GET_SMS_PATH,
                crate::transport::encode_get_sms_query(&request),
            )
            .await?;
        match decode(response, crate::transport::decode_get_sms_json_response)? {
            Reply::Ok(code) => Ok(code),
            Reply::Error(err) => Err(SmsManError::SmsNotReceived(err)),
        }
    }

    /// Catalog of supported countries.
    pub async fn countries(&self) -> Result<Catalog, SmsManError> {
        self.catalog(COUNTRIES_PATH).await
    }

    /// Catalog of supported services.
    pub async fn services(&self) -> Result<Catalog, SmsManError> {
        self.catalog(SERVICES_PATH).await
    }

    /// Rent one number.
    ///
    /// Errors:
    /// - [`SmsManError::LowBalance`] for `error_code == "balance"`,
    /// - [`SmsManError::NoNumbers`] for `error_code == "no_numbers"`,
    /// - [`SmsManError::WrongToken`] for any other reply without `request_id` and `number`.
    pub async fn request_number(&self, request: RequestNumber) -> Result<RentedNumber, SmsManError> {
        match self.get_number_reply(&request).await? {
            Reply::Ok(rented) => Ok(rented),
            Reply::Error(err) => Err(number_error(err)),
        }
    }

    /// Change the status of a rented number (e.g. give it back with
    /// [`SetStatus::reject`]).
    pub async fn set_status(&self, request: SetStatus) -> Result<(), SmsManError> {
        let response = self
            .get(
                SET_STATUS_PATH,
                crate::transport::encode_set_status_query(&request),
            )
            .await?;
        match decode(response, crate::transport::decode_set_status_json_response)? {
            Reply::Ok(()) => Ok(()),
            Reply::Error(err) => Err(SmsManError::WrongToken(err)),
        }
    }

    async fn catalog(&self, path: &'static str) -> Result<Catalog, SmsManError> {
        let response = self.get(path, Vec::new()).await?;
        match decode(response, crate::transport::decode_catalog_json_response)? {
            Reply::Ok(catalog) => Ok(catalog),
            Reply::Error(err) => Err(SmsManError::WrongToken(err)),
        }
    }

    async fn get_number_reply(
        &self,
        request: &RequestNumber,
    ) -> Result<Reply<RentedNumber>, SmsManError> {
        let response = self
            .get(
                GET_NUMBER_PATH,
                crate::transport::encode_get_number_query(request),
            )
            .await?;
        decode(response, crate::transport::decode_get_number_json_response)
    }

    async fn get(
        &self,
        path: &'static str,
        query: Vec<(String, String)>,
    ) -> Result<HttpResponse, SmsManError> {
        let mut params = crate::transport::encode_base_query(&self.token);
        params.extend(query);

        let url = format!("{}{}", self.base_url, path);
        let fields: Vec<&str> = params.iter().map(|(key, _)| key.as_str()).collect();
        debug!(endpoint = path, params = ?fields, "sending sms-man request");

        let response = self
            .http
            .get(&url, params)
            .await
            .map_err(SmsManError::Transport)?;
        debug!(endpoint = path, status = response.status, "sms-man response received");
        Ok(response)
    }
}

/// Decode a body; HTTP status only matters when the body is not valid JSON.
fn decode<T>(
    response: HttpResponse,
    decoder: impl FnOnce(&str) -> Result<T, TransportError>,
) -> Result<T, SmsManError> {
    match decoder(&response.body) {
        Ok(parsed) => Ok(parsed),
        Err(_) if !(200..=299).contains(&response.status) => {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            Err(SmsManError::HttpStatus {
                status: response.status,
                body,
            })
        }
        Err(err) => Err(SmsManError::Parse(Box::new(err))),
    }
}

fn number_error(err: ProviderError) -> SmsManError {
    match err.code.as_ref().and_then(ErrorCode::known) {
        Some(KnownErrorCode::LowBalance) => SmsManError::LowBalance(err),
        Some(KnownErrorCode::NoNumbers) => SmsManError::NoNumbers(err),
        _ => SmsManError::WrongToken(err),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use crate::domain::{CountryId, NumberStatus, RequestId, ServiceId};

    use super::*;

    #[derive(Debug, Clone)]
    pub(crate) struct FakeTransport {
        state: Arc<Mutex<FakeTransportState>>,
    }

    #[derive(Debug, Default)]
    struct FakeTransportState {
        requests: Vec<(String, Vec<(String, String)>)>,
        replies: VecDeque<(u16, String)>,
        in_flight: usize,
        max_in_flight: usize,
    }

    impl FakeTransport {
        /// Replies are served in order; the last one repeats once the queue runs dry.
        pub(crate) fn new<I, S>(replies: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self::with_status(replies.into_iter().map(|body| (200, body.into())))
        }

        pub(crate) fn with_status<I>(replies: I) -> Self
        where
            I: IntoIterator<Item = (u16, String)>,
        {
            Self {
                state: Arc::new(Mutex::new(FakeTransportState {
                    replies: replies.into_iter().collect(),
                    ..Default::default()
                })),
            }
        }

        pub(crate) fn requests(&self) -> Vec<(String, Vec<(String, String)>)> {
            self.state.lock().unwrap().requests.clone()
        }

        pub(crate) fn last_request(&self) -> (String, Vec<(String, String)>) {
            self.requests().pop().expect("no request was sent")
        }

        pub(crate) fn max_in_flight(&self) -> usize {
            self.state.lock().unwrap().max_in_flight
        }
    }

    impl HttpTransport for FakeTransport {
        fn get<'a>(
            &'a self,
            url: &'a str,
            params: Vec<(String, String)>,
        ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
            Box::pin(async move {
                let (status, body) = {
                    let mut state = self.state.lock().unwrap();
                    state.requests.push((url.to_owned(), params));
                    state.in_flight += 1;
                    state.max_in_flight = state.max_in_flight.max(state.in_flight);
                    if state.replies.len() > 1 {
                        state.replies.pop_front().unwrap()
                    } else {
                        state.replies.front().cloned().unwrap()
                    }
                };

                // Let other slots run while this request is "on the wire".
                for _ in 0..3 {
                    tokio::task::yield_now().await;
                }

                self.state.lock().unwrap().in_flight -= 1;
                Ok(HttpResponse { status, body })
            })
        }
    }

    pub(crate) fn assert_param(params: &[(String, String)], key: &str, value: &str) {
        assert!(
            params.iter().any(|(k, v)| k == key && v == value),
            "missing param {key}={value}; got: {params:?}"
        );
    }

    pub(crate) fn make_client(token: &str, transport: FakeTransport) -> SmsManClient {
        make_client_with_policy(token, transport, BulkPolicy::default())
    }

    pub(crate) fn make_client_with_policy(
        token: &str,
        transport: FakeTransport,
        bulk_policy: BulkPolicy,
    ) -> SmsManClient {
        SmsManClient {
            token: Token::new(token).unwrap(),
            base_url: "https://example.invalid/control".to_owned(),
            bulk_policy,
            http: Arc::new(transport),
        }
    }

    fn number_request() -> RequestNumber {
        RequestNumber::new(CountryId::new("7").unwrap(), ServiceId::new("5").unwrap())
    }

    #[tokio::test]
    async fn balance_returns_value_and_sends_token() {
        let transport = FakeTransport::new([r#"{ "balance": "123.45" }"#]);
        let client = make_client("test_key", transport.clone());

        assert_eq!(client.balance().await.unwrap(), 123.45);

        let (url, params) = transport.last_request();
        assert_eq!(url, "https://example.invalid/control/get-balance");
        assert_eq!(params, vec![("token".to_owned(), "test_key".to_owned())]);
    }

    #[tokio::test]
    async fn balance_without_field_is_wrong_token_with_message() {
        let transport = FakeTransport::new([
            r#"{ "error_code": "wrong_token", "error_msg": "Wrong token!" }"#,
        ]);
        let client = make_client("bad_key", transport);

        let err = client.balance().await.unwrap_err();
        match err {
            SmsManError::WrongToken(err) => {
                assert_eq!(err.message.as_deref(), Some("Wrong token!"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn limits_with_only_country_omits_service() {
        let transport = FakeTransport::new([r#"{ "7": { "5": { "numbers": 10 } } }"#]);
        let client = make_client("test_key", transport.clone());

        let limits = client
            .limits(GetLimits::all().country(CountryId::new("7").unwrap()))
            .await
            .unwrap();
        assert_eq!(limits.as_value()["7"]["5"]["numbers"], 10);

        let (url, params) = transport.last_request();
        assert_eq!(url, "https://example.invalid/control/limits");
        assert_param(&params, "token", "test_key");
        assert_param(&params, "country_id", "7");
        assert!(
            params
                .iter()
                .all(|(key, _)| !matches!(key.as_str(), "application_id" | "request_id" | "status")),
            "unexpected params: {params:?}"
        );
    }

    #[tokio::test]
    async fn limits_pass_error_payload_through() {
        let transport = FakeTransport::new([r#"{ "error_code": "wrong_token" }"#]);
        let client = make_client("bad_key", transport);

        let limits = client.limits(GetLimits::all()).await.unwrap();
        assert_eq!(limits.as_value()["error_code"], "wrong_token");
    }

    #[tokio::test]
    async fn sms_code_is_returned_when_present() {
        let transport = FakeTransport::new([r#"{ "request_id": "99", "sms_code": "4521" }"#]);
        let client = make_client("test_key", transport.clone());

        let code = client
            .sms_code(GetSms::new(RequestId::new("99").unwrap()))
            .await
            .unwrap();
        assert_eq!(code.as_str(), "4521");

        let (url, params) = transport.last_request();
        assert_eq!(url, "https://example.invalid/control/get-sms");
        assert_param(&params, "request_id", "99");
    }

    #[tokio::test]
    async fn sms_code_missing_is_sms_not_received() {
        let transport = FakeTransport::new([
            r#"{ "error_code": "wait_sms", "error_msg": "Still waiting..." }"#,
        ]);
        let client = make_client("test_key", transport);

        let err = client
            .sms_code(GetSms::new(RequestId::new("99").unwrap()))
            .await
            .unwrap_err();
        assert!(matches!(err, SmsManError::SmsNotReceived(_)));
    }

    #[tokio::test]
    async fn catalogs_use_their_endpoints() {
        let transport = FakeTransport::new([r#"{ "1": { "id": "1", "title": "Russia" } }"#]);
        let client = make_client("test_key", transport.clone());

        let countries = client.countries().await.unwrap();
        assert_eq!(countries.title("1"), Some("Russia"));
        client.services().await.unwrap();

        let urls = transport
            .requests()
            .into_iter()
            .map(|(url, _)| url)
            .collect::<Vec<_>>();
        assert_eq!(
            urls,
            vec![
                "https://example.invalid/control/countries",
                "https://example.invalid/control/applications",
            ]
        );
    }

    #[tokio::test]
    async fn catalog_without_marker_key_is_wrong_token() {
        let transport = FakeTransport::new([r#"{ "error_msg": "Wrong token!" }"#]);
        let client = make_client("bad_key", transport);

        assert!(matches!(
            client.services().await.unwrap_err(),
            SmsManError::WrongToken(_)
        ));
    }

    #[tokio::test]
    async fn request_number_end_to_end() {
        let transport = FakeTransport::new([r#"{"request_id":"99","number":"123456"}"#]);
        let client = make_client("T1", transport.clone());

        let rented = client.request_number(number_request()).await.unwrap();
        assert_eq!(rented.request_id.as_str(), "99");
        assert_eq!(rented.number.raw(), "123456");

        let (url, params) = transport.last_request();
        assert_eq!(url, "https://example.invalid/control/get-number");
        assert_eq!(
            params,
            vec![
                ("token".to_owned(), "T1".to_owned()),
                ("country_id".to_owned(), "7".to_owned()),
                ("application_id".to_owned(), "5".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn request_number_maps_error_codes() {
        let cases = [
            (r#"{ "error_code": "balance", "error_msg": "Low" }"#, "low"),
            (r#"{ "error_code": "no_numbers", "error_msg": "None" }"#, "none"),
            (r#"{ "error_code": "other", "error_msg": "Other" }"#, "wrong"),
            (r#"{ "error_msg": "No code" }"#, "wrong"),
        ];

        for (body, expected) in cases {
            let client = make_client("test_key", FakeTransport::new([body]));
            let err = client.request_number(number_request()).await.unwrap_err();
            let matched = match expected {
                "low" => matches!(err, SmsManError::LowBalance(_)),
                "none" => matches!(err, SmsManError::NoNumbers(_)),
                _ => matches!(err, SmsManError::WrongToken(_)),
            };
            assert!(matched, "body {body} mapped to {err:?}");
        }
    }

    #[tokio::test]
    async fn non_string_error_fields_are_still_classified() {
        let numeric = r#"{ "error_code": 3, "error_msg": "x" }"#;

        let client = make_client("test_key", FakeTransport::new([numeric]));
        match client.request_number(number_request()).await.unwrap_err() {
            SmsManError::WrongToken(err) => {
                assert_eq!(err.code.as_ref().map(ErrorCode::as_str), Some("3"));
                assert_eq!(err.message.as_deref(), Some("x"));
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let client = make_client("test_key", FakeTransport::new([numeric]));
        assert!(matches!(
            client.balance().await.unwrap_err(),
            SmsManError::WrongToken(_)
        ));

        let nested_message = r#"{ "error_code": "other", "error_msg": { "ru": "x" } }"#;
        let client = make_client("test_key", FakeTransport::new([nested_message]));
        assert!(matches!(
            client.request_number(number_request()).await.unwrap_err(),
            SmsManError::WrongToken(_)
        ));
    }

    #[tokio::test]
    async fn limits_send_service_filter_alone_or_with_country() {
        let transport = FakeTransport::new([r#"{}"#]);
        let client = make_client("test_key", transport.clone());

        client
            .limits(GetLimits::all().service(ServiceId::new("5").unwrap()))
            .await
            .unwrap();
        let (_, params) = transport.last_request();
        assert_eq!(
            params,
            vec![
                ("token".to_owned(), "test_key".to_owned()),
                ("application_id".to_owned(), "5".to_owned()),
            ]
        );

        client
            .limits(
                GetLimits::all()
                    .country(CountryId::new("7").unwrap())
                    .service(ServiceId::new("5").unwrap()),
            )
            .await
            .unwrap();
        let (_, params) = transport.last_request();
        assert_eq!(
            params,
            vec![
                ("token".to_owned(), "test_key".to_owned()),
                ("country_id".to_owned(), "7".to_owned()),
                ("application_id".to_owned(), "5".to_owned()),
            ]
        );
    }

    #[tokio::test]
    async fn set_status_sends_request_id_and_status() {
        let transport = FakeTransport::new([r#"{ "request_id": "99", "success": true }"#]);
        let client = make_client("test_key", transport.clone());

        client
            .set_status(SetStatus::new(
                RequestId::new("99").unwrap(),
                NumberStatus::Reject,
            ))
            .await
            .unwrap();

        let (url, params) = transport.last_request();
        assert_eq!(url, "https://example.invalid/control/set-status");
        assert_param(&params, "request_id", "99");
        assert_param(&params, "status", "reject");
    }

    #[tokio::test]
    async fn non_json_body_with_error_status_maps_to_http_status() {
        let transport = FakeTransport::with_status([(502, "Bad Gateway".to_owned())]);
        let client = make_client("test_key", transport);

        assert!(matches!(
            client.balance().await.unwrap_err(),
            SmsManError::HttpStatus {
                status: 502,
                body: Some(_)
            }
        ));
    }

    #[tokio::test]
    async fn json_body_wins_over_http_status() {
        let transport =
            FakeTransport::with_status([(500, r#"{ "balance": 1.5 }"#.to_owned())]);
        let client = make_client("test_key", transport);

        assert_eq!(client.balance().await.unwrap(), 1.5);
    }

    #[tokio::test]
    async fn invalid_json_maps_to_parse_error() {
        let transport = FakeTransport::new(["{ not json }"]);
        let client = make_client("test_key", transport);

        assert!(matches!(
            client.balance().await.unwrap_err(),
            SmsManError::Parse(_)
        ));
    }

    #[test]
    fn error_helpers() {
        let no_numbers = SmsManError::NoNumbers(ProviderError::default());
        assert!(no_numbers.is_retryable());
        assert!(no_numbers.provider_error().is_some());

        let low = SmsManError::LowBalance(ProviderError::default());
        assert!(!low.is_retryable());

        let parse = SmsManError::Parse("bad".into());
        assert!(parse.provider_error().is_none());
    }

    #[test]
    fn builder_rejects_invalid_base_url() {
        let err = SmsManClient::builder(Token::new("key").unwrap())
            .base_url("not a url")
            .build()
            .err()
            .unwrap();
        assert!(matches!(err, SmsManError::InvalidBaseUrl(_)));
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let client = SmsManClient::builder(Token::new("key").unwrap())
            .base_url("https://example.invalid/control/")
            .build()
            .unwrap();
        assert_eq!(client.base_url, "https://example.invalid/control");
    }
}
