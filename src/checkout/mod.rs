pub mod processor;

pub use processor::{PaymentProcessor, SimulatedProcessor};

use std::time::Duration;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::auth::Session;
use crate::error::CheckoutError;
use crate::ledger::SharedLedger;
use crate::models::{Booking, BookingStatus, NewBooking, Property};
use crate::pricing::{compute_quote, Quote};

/// What the booking dialog has collected so far
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub property: Property,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: u32,
}

impl BookingRequest {
    pub fn new(property: Property) -> Self {
        Self {
            property,
            check_in: None,
            check_out: None,
            guests: 1,
        }
    }

    pub fn with_dates(mut self, check_in: NaiveDate, check_out: NaiveDate) -> Self {
        self.check_in = Some(check_in);
        self.check_out = Some(check_out);
        self
    }

    pub fn with_guests(mut self, guests: u32) -> Self {
        self.guests = guests;
        self
    }

    /// Current price breakdown, if the dates form a stay
    pub fn quote(&self) -> Option<Quote> {
        compute_quote(self.property.price, self.check_in, self.check_out)
    }

    /// Check every precondition for confirming, returning the quote to charge
    pub fn validate(&self, session: &Session) -> Result<ValidatedRequest, CheckoutError> {
        let user = session.user().ok_or(CheckoutError::NotAuthenticated)?;
        let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out) else {
            return Err(CheckoutError::MissingDates);
        };
        let quote = self.quote().ok_or(CheckoutError::NoQuote)?;
        if !self.property.availability {
            return Err(CheckoutError::Unavailable {
                id: self.property.id.clone(),
            });
        }
        if self.guests == 0 || self.guests > self.property.max_guests {
            return Err(CheckoutError::GuestCount {
                guests: self.guests,
                max_guests: self.property.max_guests,
            });
        }
        Ok(ValidatedRequest {
            user_id: user.id.clone(),
            check_in,
            check_out,
            quote,
        })
    }

    /// Whether the confirm action should be enabled
    pub fn can_confirm(&self, session: &Session) -> bool {
        self.validate(session).is_ok()
    }
}

/// A request that passed every precondition
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedRequest {
    pub user_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub quote: Quote,
}

/// Confirms booking requests: charge first, then append to the ledger
pub struct Checkout {
    ledger: SharedLedger,
    processor: Box<dyn PaymentProcessor>,
    timeout: Duration,
}

impl Checkout {
    pub fn new(ledger: SharedLedger, processor: Box<dyn PaymentProcessor>, timeout: Duration) -> Self {
        Self {
            ledger,
            processor,
            timeout,
        }
    }

    /// Charge and record a confirmed booking.
    ///
    /// The ledger is only touched after the charge succeeds, so a failed,
    /// timed out or dropped confirmation never leaves a partial booking.
    pub async fn confirm(&self, session: &Session, request: &BookingRequest) -> Result<Booking, CheckoutError> {
        let validated = request.validate(session)?;
        let total = validated.quote.total;

        let charge = self.processor.charge(&validated.user_id, total);
        match tokio::time::timeout(self.timeout, charge).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                warn!("Payment via {} failed: {:#}", self.processor.processor_name(), e);
                return Err(CheckoutError::PaymentFailed {
                    reason: e.to_string(),
                });
            }
            Err(_) => {
                let timeout_ms = u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX);
                warn!("Payment timed out after {} ms", timeout_ms);
                return Err(CheckoutError::TimedOut { timeout_ms });
            }
        }

        let new = NewBooking {
            property_id: request.property.id.clone(),
            property: request.property.clone(),
            user_id: validated.user_id,
            check_in: validated.check_in,
            check_out: validated.check_out,
            guests: request.guests,
            total_price: total,
            status: BookingStatus::Confirmed,
        };
        let booking = self.ledger.lock().await.create_booking(new);
        info!("Booking confirmed: {} at {}", booking.id, booking.property.title);
        Ok(booking)
    }
}
