//! Append-only booking ledger and the views dashboards derive from it.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::{Booking, BookingStatus, NewBooking, Property};

/// Ledger handle shared by every client of one storefront
pub type SharedLedger = Arc<Mutex<BookingLedger>>;

#[derive(Debug, Default)]
pub struct BookingLedger {
    bookings: Vec<Booking>,
}

impl BookingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedLedger {
        Arc::new(Mutex::new(Self::new()))
    }

    /// Append a booking with a fresh id, stamped with the current time
    pub fn create_booking(&mut self, new: NewBooking) -> Booking {
        self.create_booking_at(new, Utc::now())
    }

    pub fn create_booking_at(&mut self, new: NewBooking, created_at: DateTime<Utc>) -> Booking {
        let id = format!("booking-{}", Uuid::new_v4().simple());
        let booking = Booking::from_new(id, new, created_at);
        info!(
            "Created booking {} for property {} ({})",
            booking.id, booking.property_id, booking.status
        );
        self.bookings.push(booking.clone());
        booking
    }

    /// Mark a booking cancelled. Unknown ids are ignored.
    pub fn cancel_booking(&mut self, booking_id: &str) {
        match self.bookings.iter_mut().find(|b| b.id == booking_id) {
            Some(booking) => {
                booking.status = BookingStatus::Cancelled;
                info!("Cancelled booking {}", booking_id);
            }
            None => debug!("Cancel ignored, no booking {}", booking_id),
        }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn get(&self, booking_id: &str) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == booking_id)
    }

    pub fn filter_by_user(&self, user_id: &str) -> Vec<Booking> {
        self.bookings
            .iter()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect()
    }

    /// Bookings made against any of `properties`, in ledger order
    pub fn filter_by_properties(&self, properties: &[Property]) -> Vec<Booking> {
        let ids: HashSet<&str> = properties.iter().map(|p| p.id.as_str()).collect();
        self.bookings
            .iter()
            .filter(|b| ids.contains(b.property_id.as_str()))
            .cloned()
            .collect()
    }
}

/// Confirmed bookings whose check-in is still ahead. Cancelled stays are left out.
pub fn upcoming(bookings: &[Booking], now: DateTime<Utc>) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed && b.check_in_at() > now)
        .cloned()
        .collect()
}

/// Bookings whose check-out has passed, whatever their status.
pub fn past(bookings: &[Booking], now: DateTime<Utc>) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| b.check_out_at() < now)
        .cloned()
        .collect()
}

/// Sum of confirmed booking totals
pub fn revenue(bookings: &[Booking]) -> f64 {
    bookings
        .iter()
        .filter(|b| b.status == BookingStatus::Confirmed)
        .map(|b| b.total_price)
        .sum()
}

/// Mean listing rating, 0 when there are no listings
pub fn average_rating(properties: &[Property]) -> f64 {
    if properties.is_empty() {
        return 0.0;
    }
    properties.iter().map(|p| p.rating).sum::<f64>() / properties.len() as f64
}
