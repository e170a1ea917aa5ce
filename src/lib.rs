//! Typed Rust client for the sms-man number rental HTTP API.
//!
//! The crate is split into a domain layer of strong types, a transport layer for
//! wire-format quirks, and a small client layer orchestrating requests. The async
//! [`SmsManClient`] is the primary API; [`blocking::SmsManClient`] wraps it for
//! callers without a runtime.
//!
//! ```rust,no_run
//! use smsman::{CountryId, RequestNumber, ServiceId, SmsManClient, Token};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smsman::SmsManError> {
//!     let client = SmsManClient::new(Token::new("...")?)?;
//!     let request = RequestNumber::new(CountryId::new("7")?, ServiceId::new("5")?);
//!     let rented = client.request_number(request).await?;
//!     println!("{} -> {}", rented.request_id.as_str(), rented.number.raw());
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod blocking;
pub mod client;
pub mod domain;
mod transport;

pub use client::{BulkPolicy, SmsManClient, SmsManClientBuilder, SmsManError};
pub use domain::{
    Catalog, CountryId, ErrorCode, GetLimits, GetSms, KnownErrorCode, Limits, NumberStatus,
    PhoneNumber, ProviderError, RentedNumber, RequestId, RequestNumber, RequestNumbers, ServiceId,
    SetStatus, SmsCode, Token, ValidationError,
};
