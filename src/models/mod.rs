use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

mod amenity;

pub use amenity::{Amenity, AmenityDisplay, FALLBACK_ICON};

/// A listed short-term rental
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: String,
    pub title: String,
    pub location: String,
    /// Nightly price
    pub price: f64,
    pub rating: f64,
    pub reviews: u32,
    pub images: Vec<String>,
    pub amenities: Vec<Amenity>,
    pub availability: bool,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub max_guests: u32,
    pub description: String,
    pub host_id: String,
    pub host_name: String,
}

/// Lifecycle state of a booking
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller-supplied fields of a booking. The ledger adds `id` and `created_at`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub property_id: String,
    /// Snapshot of the listing at booking time
    pub property: Property,
    pub user_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total_price: f64,
    pub status: BookingStatus,
}

/// A booking recorded in the ledger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub property_id: String,
    pub property: Property,
    pub user_id: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests: u32,
    pub total_price: f64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub(crate) fn from_new(id: String, new: NewBooking, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            property_id: new.property_id,
            property: new.property,
            user_id: new.user_id,
            check_in: new.check_in,
            check_out: new.check_out,
            guests: new.guests,
            total_price: new.total_price,
            status: new.status,
            created_at,
        }
    }

    /// Check-in as an instant (midnight UTC)
    pub fn check_in_at(&self) -> DateTime<Utc> {
        start_of_day(self.check_in)
    }

    /// Check-out as an instant (midnight UTC)
    pub fn check_out_at(&self) -> DateTime<Utc> {
        start_of_day(self.check_out)
    }
}

fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// An account produced by the authentication layer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub is_host: bool,
    pub joined_date: NaiveDate,
}
