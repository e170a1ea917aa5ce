//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::{GetLimits, GetSms, RequestNumber, RequestNumbers, SetStatus};
pub use response::{Catalog, Limits, ProviderError, RentedNumber};
pub use validation::ValidationError;
pub use value::{
    CountryId, ErrorCode, KnownErrorCode, NumberStatus, PhoneNumber, RequestId, ServiceId,
    SmsCode, Token,
};
