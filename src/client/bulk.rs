//! Bulk number rental: many `get-number` calls behind one concurrency gate.

use futures::future::try_join_all;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use super::{SmsManClient, SmsManError, number_error};
use crate::domain::{
    ErrorCode, KnownErrorCode, RentedNumber, RequestNumber, RequestNumbers, ValidationError,
};
use crate::transport::Reply;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Concurrency cap and per-slot retry budget for [`SmsManClient::request_numbers`].
///
/// Invariant: both values are at least 1.
pub struct BulkPolicy {
    max_in_flight: u32,
    attempts_per_slot: u32,
}

impl BulkPolicy {
    pub const DEFAULT_MAX_IN_FLIGHT: u32 = 2;
    pub const DEFAULT_ATTEMPTS_PER_SLOT: u32 = 3;

    /// Create a validated policy.
    pub fn new(max_in_flight: u32, attempts_per_slot: u32) -> Result<Self, ValidationError> {
        if max_in_flight == 0 {
            return Err(ValidationError::OutOfRange {
                field: "max_in_flight",
                min: 1,
                actual: max_in_flight,
            });
        }
        if attempts_per_slot == 0 {
            return Err(ValidationError::OutOfRange {
                field: "attempts_per_slot",
                min: 1,
                actual: attempts_per_slot,
            });
        }
        Ok(Self {
            max_in_flight,
            attempts_per_slot,
        })
    }

    /// Maximum number of `get-number` calls in flight across the whole batch.
    pub fn max_in_flight(self) -> u32 {
        self.max_in_flight
    }

    /// Maximum number of tries per slot.
    pub fn attempts_per_slot(self) -> u32 {
        self.attempts_per_slot
    }
}

impl Default for BulkPolicy {
    fn default() -> Self {
        Self {
            max_in_flight: Self::DEFAULT_MAX_IN_FLIGHT,
            attempts_per_slot: Self::DEFAULT_ATTEMPTS_PER_SLOT,
        }
    }
}

impl SmsManClient {
    /// Rent `amount` numbers for one country/service pair.
    ///
    /// Slots run concurrently on the calling task, with at most
    /// [`BulkPolicy::max_in_flight`] requests on the wire. A slot that gets
    /// `no_numbers` tries again, up to [`BulkPolicy::attempts_per_slot`] tries; its
    /// permit is released between tries.
    ///
    /// The result has one entry per slot, in slot order. A slot that used up its
    /// tries on `no_numbers` is `None`.
    ///
    /// Errors: the first other failure ([`SmsManError::LowBalance`],
    /// [`SmsManError::WrongToken`], transport or parse errors) aborts the whole
    /// batch and the remaining slots are dropped.
    pub async fn request_numbers(
        &self,
        request: RequestNumbers,
    ) -> Result<Vec<Option<RentedNumber>>, SmsManError> {
        if request.amount() == 0 {
            return Ok(Vec::new());
        }

        let gate = Semaphore::new(self.bulk_policy.max_in_flight() as usize);
        let slots = (0..request.amount()).map(|slot| self.rent_slot(slot, request.per_slot(), &gate));
        try_join_all(slots).await
    }

    async fn rent_slot(
        &self,
        slot: usize,
        request: &RequestNumber,
        gate: &Semaphore,
    ) -> Result<Option<RentedNumber>, SmsManError> {
        let attempts = self.bulk_policy.attempts_per_slot();
        for attempt in 1..=attempts {
            let reply = {
                let _permit = gate
                    .acquire()
                    .await
                    .map_err(|err| SmsManError::Transport(Box::new(err)))?;
                self.get_number_reply(request).await?
            };

            let err = match reply {
                Reply::Ok(rented) => return Ok(Some(rented)),
                Reply::Error(err) => err,
            };
            if err.code.as_ref().and_then(ErrorCode::known) != Some(KnownErrorCode::NoNumbers) {
                return Err(number_error(err));
            }
            debug!(slot, attempt, attempts, "no numbers available for slot");
        }

        warn!(slot, attempts, "bulk slot exhausted without a number");
        Ok(None)
    }
}
