//! Blocking facade over [`crate::SmsManClient`].
//!
//! Each call starts a single-threaded runtime, drives the async operation to
//! completion and shuts the runtime down before returning. Do not call these
//! methods from inside an async context; use the async client there instead.

use std::future::Future;

use crate::client::{SmsManClientBuilder, SmsManError};
use crate::domain::{
    Catalog, GetLimits, GetSms, Limits, RentedNumber, RequestNumber, RequestNumbers, SetStatus,
    SmsCode, Token,
};

#[derive(Clone)]
/// Synchronous sms-man client. See [`crate::SmsManClient`] for the semantics of
/// each operation.
pub struct SmsManClient {
    inner: crate::client::SmsManClient,
}

impl SmsManClient {
    /// Create a client with the default settings.
    pub fn new(token: Token) -> Result<Self, SmsManError> {
        Ok(Self {
            inner: crate::client::SmsManClient::new(token)?,
        })
    }

    /// Start building a client with custom settings; wrap the result with
    /// [`SmsManClient::from`].
    pub fn builder(token: Token) -> SmsManClientBuilder {
        SmsManClientBuilder::new(token)
    }

    /// Account balance. See [`crate::SmsManClient::balance`].
    pub fn balance(&self) -> Result<f64, SmsManError> {
        run(self.inner.balance())
    }

    /// Available numbers per country and service. See [`crate::SmsManClient::limits`].
    pub fn limits(&self, request: GetLimits) -> Result<Limits, SmsManError> {
        run(self.inner.limits(request))
    }

    /// Poll for the SMS code of a rented number. See [`crate::SmsManClient::sms_code`].
    pub fn sms_code(&self, request: GetSms) -> Result<SmsCode, SmsManError> {
        run(self.inner.sms_code(request))
    }

    /// Catalog of supported countries. See [`crate::SmsManClient::countries`].
    pub fn countries(&self) -> Result<Catalog, SmsManError> {
        run(self.inner.countries())
    }

    /// Catalog of supported services. See [`crate::SmsManClient::services`].
    pub fn services(&self) -> Result<Catalog, SmsManError> {
        run(self.inner.services())
    }

    /// Rent one number. See [`crate::SmsManClient::request_number`].
    pub fn request_number(&self, request: RequestNumber) -> Result<RentedNumber, SmsManError> {
        run(self.inner.request_number(request))
    }

    /// Rent several numbers; exhausted slots are `None`. See
    /// [`crate::SmsManClient::request_numbers`].
    pub fn request_numbers(
        &self,
        request: RequestNumbers,
    ) -> Result<Vec<Option<RentedNumber>>, SmsManError> {
        run(self.inner.request_numbers(request))
    }

    /// Change the status of a rented number. See [`crate::SmsManClient::set_status`].
    pub fn set_status(&self, request: SetStatus) -> Result<(), SmsManError> {
        run(self.inner.set_status(request))
    }
}

impl From<crate::client::SmsManClient> for SmsManClient {
    fn from(inner: crate::client::SmsManClient) -> Self {
        Self { inner }
    }
}

fn run<T>(operation: impl Future<Output = Result<T, SmsManError>>) -> Result<T, SmsManError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(SmsManError::Runtime)?;
    let output = runtime.block_on(operation);
    drop(runtime);
    output
}
