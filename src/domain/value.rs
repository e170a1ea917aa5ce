use std::fmt;

use crate::domain::validation::ValidationError;

#[derive(Clone, PartialEq, Eq, Hash)]
/// sms-man API token.
///
/// Invariant: non-empty after trimming. `Debug` output never contains the value.
pub struct Token(String);

impl Token {
    /// Query parameter name used by sms-man (`token`).
    pub const FIELD: &'static str = "token";

    /// Create a validated [`Token`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated token.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// sms-man country identifier (`country_id`), as listed by the countries catalog.
///
/// Invariant: non-empty after trimming.
pub struct CountryId(String);

impl CountryId {
    /// Query parameter name used by sms-man (`country_id`).
    pub const FIELD: &'static str = "country_id";

    /// Create a validated [`CountryId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated country id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// sms-man service identifier (`application_id`), as listed by the services catalog.
///
/// Invariant: non-empty after trimming.
pub struct ServiceId(String);

impl ServiceId {
    /// Query parameter name used by sms-man (`application_id`).
    pub const FIELD: &'static str = "application_id";

    /// Create a validated [`ServiceId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated service id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Handle returned by `get-number` (`request_id`).
///
/// It is only meaningful as input to `get-sms` and `set-status`.
/// Invariant: non-empty after trimming.
pub struct RequestId(String);

impl RequestId {
    /// Query parameter name used by sms-man (`request_id`).
    pub const FIELD: &'static str = "request_id";

    /// Create a validated [`RequestId`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the validated request id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Rented phone number as returned by sms-man (`number`).
///
/// The provider sends international digits without a leading `+`; the raw value is
/// kept as-is. Use [`PhoneNumber::e164`] for a normalized form.
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Response field name used by sms-man (`number`).
    pub const FIELD: &'static str = "number";

    /// Create a validated (non-empty) phone number.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Raw value as returned by the provider.
    pub fn raw(&self) -> &str {
        &self.0
    }

    /// Parse the number with the `phonenumber` crate.
    ///
    /// A missing `+` prefix is added before parsing.
    pub fn parse(&self) -> Result<phonenumber::PhoneNumber, ValidationError> {
        let international = if self.0.starts_with('+') {
            self.0.clone()
        } else {
            format!("+{}", self.0)
        };
        phonenumber::parse(None, &international).map_err(|_| {
            ValidationError::InvalidPhoneNumber {
                input: self.0.clone(),
            }
        })
    }

    /// Normalized E.164 representation (`+79251234567`).
    pub fn e164(&self) -> Result<String, ValidationError> {
        let parsed = self.parse()?;
        Ok(phonenumber::format(&parsed)
            .mode(phonenumber::Mode::E164)
            .to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// SMS code received for a rented number (`sms_code`).
///
/// No format validation is performed.
pub struct SmsCode(String);

impl SmsCode {
    /// Response field name used by sms-man (`sms_code`).
    pub const FIELD: &'static str = "sms_code";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SmsCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Status values accepted by `set-status`.
pub enum NumberStatus {
    /// The number is ready to receive an SMS.
    Ready,
    /// Finish the activation.
    Close,
    /// Give the number back without using it.
    Reject,
    /// The number was already used by the service.
    Used,
}

impl NumberStatus {
    /// Query parameter name used by sms-man (`status`).
    pub const FIELD: &'static str = "status";

    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Close => "close",
            Self::Reject => "reject",
            Self::Used => "used",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Provider error code (`error_code`).
///
/// This value is preserved as-is even when the code is unknown to this crate.
pub struct ErrorCode(String);

impl ErrorCode {
    /// Response field name used by sms-man (`error_code`).
    pub const FIELD: &'static str = "error_code";

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Get the code as provided by sms-man.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Map this code to a known variant, if one exists.
    pub fn known(&self) -> Option<KnownErrorCode> {
        KnownErrorCode::from_code(&self.0)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
/// Known sms-man error codes.
pub enum KnownErrorCode {
    LowBalance,
    NoNumbers,
    WaitSms,
    WrongToken,
}

impl KnownErrorCode {
    /// Convert a raw sms-man error code into a known variant.
    pub fn from_code(code: &str) -> Option<Self> {
        Some(match code {
            "balance" => Self::LowBalance,
            "no_numbers" => Self::NoNumbers,
            "wait_sms" => Self::WaitSms,
            "wrong_token" => Self::WrongToken,
            _ => return None,
        })
    }
}
