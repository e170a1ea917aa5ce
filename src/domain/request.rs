use crate::domain::value::{CountryId, NumberStatus, RequestId, ServiceId};

/// Query for `limits`. Both filters are optional; without them the provider
/// reports every country and service.
#[derive(Debug, Clone, Default)]
pub struct GetLimits {
    country: Option<CountryId>,
    service: Option<ServiceId>,
}

impl GetLimits {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn country(mut self, country: CountryId) -> Self {
        self.country = Some(country);
        self
    }

    pub fn service(mut self, service: ServiceId) -> Self {
        self.service = Some(service);
        self
    }

    pub fn country_id(&self) -> Option<&CountryId> {
        self.country.as_ref()
    }

    pub fn service_id(&self) -> Option<&ServiceId> {
        self.service.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct RequestNumber {
    country: CountryId,
    service: ServiceId,
}

impl RequestNumber {
    pub fn new(country: CountryId, service: ServiceId) -> Self {
        Self { country, service }
    }

    pub fn country_id(&self) -> &CountryId {
        &self.country
    }

    pub fn service_id(&self) -> &ServiceId {
        &self.service
    }
}

/// Bulk rental of `amount` numbers for one country/service pair.
#[derive(Debug, Clone)]
pub struct RequestNumbers {
    number: RequestNumber,
    amount: usize,
}

impl RequestNumbers {
    pub fn new(country: CountryId, service: ServiceId, amount: usize) -> Self {
        Self {
            number: RequestNumber::new(country, service),
            amount,
        }
    }

    /// The single-number request each slot repeats.
    pub fn per_slot(&self) -> &RequestNumber {
        &self.number
    }

    pub fn amount(&self) -> usize {
        self.amount
    }
}

#[derive(Debug, Clone)]
pub struct GetSms {
    request_id: RequestId,
}

impl GetSms {
    pub fn new(request_id: RequestId) -> Self {
        Self { request_id }
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }
}

#[derive(Debug, Clone)]
pub struct SetStatus {
    request_id: RequestId,
    status: NumberStatus,
}

impl SetStatus {
    pub fn new(request_id: RequestId, status: NumberStatus) -> Self {
        Self { request_id, status }
    }

    /// Shorthand for giving a number back unused.
    pub fn reject(request_id: RequestId) -> Self {
        Self::new(request_id, NumberStatus::Reject)
    }

    pub fn request_id(&self) -> &RequestId {
        &self.request_id
    }

    pub fn status(&self) -> NumberStatus {
        self.status
    }
}
