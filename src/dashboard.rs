//! Summaries behind the guest and host dashboards.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{sort, CatalogStore, SortKey};
use crate::ledger::{average_rating, past, revenue, upcoming, BookingLedger};
use crate::models::{Booking, Property};

const TOP_RATED_LIMIT: usize = 3;
const RECENT_BOOKINGS_LIMIT: usize = 5;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestDashboard {
    pub bookings: Vec<Booking>,
    pub upcoming: Vec<Booking>,
    pub past: Vec<Booking>,
}

impl GuestDashboard {
    pub fn build(ledger: &BookingLedger, user_id: &str, now: DateTime<Utc>) -> Self {
        let bookings = ledger.filter_by_user(user_id);
        Self {
            upcoming: upcoming(&bookings, now),
            past: past(&bookings, now),
            bookings,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostDashboard {
    pub listings: Vec<Property>,
    pub available_listings: usize,
    pub bookings: Vec<Booking>,
    pub upcoming: Vec<Booking>,
    pub total_revenue: f64,
    pub average_rating: f64,
    pub top_rated: Vec<Property>,
    pub recent_bookings: Vec<Booking>,
}

impl HostDashboard {
    pub fn build(catalog: &CatalogStore, ledger: &BookingLedger, host_id: &str, now: DateTime<Utc>) -> Self {
        let listings = catalog.filter_by_host(host_id);
        let bookings = ledger.filter_by_properties(&listings);

        let mut top_rated = sort(&listings, SortKey::Rating);
        top_rated.truncate(TOP_RATED_LIMIT);

        Self {
            available_listings: listings.iter().filter(|p| p.availability).count(),
            upcoming: upcoming(&bookings, now),
            total_revenue: revenue(&bookings),
            average_rating: average_rating(&listings),
            top_rated,
            recent_bookings: bookings.iter().take(RECENT_BOOKINGS_LIMIT).cloned().collect(),
            listings,
            bookings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_properties;
    use crate::models::{BookingStatus, NewBooking};
    use chrono::{NaiveDate, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 10, 9, 30, 0).unwrap()
    }

    fn book(ledger: &mut BookingLedger, property: &Property, user: &str, from: (u32, u32), to: (u32, u32)) -> Booking {
        ledger.create_booking(NewBooking {
            property_id: property.id.clone(),
            property: property.clone(),
            user_id: user.to_string(),
            check_in: NaiveDate::from_ymd_opt(2024, from.0, from.1).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, to.0, to.1).unwrap(),
            guests: 1,
            total_price: 100.0,
            status: BookingStatus::Confirmed,
        })
    }

    #[test]
    fn guest_dashboard_splits_by_time() {
        let properties = seed_properties();
        let mut ledger = BookingLedger::new();
        book(&mut ledger, &properties[0], "user1", (7, 1), (7, 3));
        book(&mut ledger, &properties[1], "user1", (5, 1), (5, 3));
        book(&mut ledger, &properties[1], "other", (7, 1), (7, 3));

        let dashboard = GuestDashboard::build(&ledger, "user1", now());
        assert_eq!(dashboard.bookings.len(), 2);
        assert_eq!(dashboard.upcoming.len(), 1);
        assert_eq!(dashboard.past.len(), 1);
    }

    #[test]
    fn host_dashboard_aggregates_own_listings() {
        let mut properties = seed_properties();
        properties[1].host_id = "host1".to_string();
        properties[1].availability = false;
        let catalog = CatalogStore::new(properties.clone()).unwrap();
        let mut ledger = BookingLedger::new();
        let cancelled = book(&mut ledger, &properties[0], "user1", (7, 1), (7, 3));
        book(&mut ledger, &properties[1], "user2", (8, 1), (8, 3));
        book(&mut ledger, &properties[4], "user2", (8, 1), (8, 3));
        ledger.cancel_booking(&cancelled.id);

        let dashboard = HostDashboard::build(&catalog, &ledger, "host1", now());
        assert_eq!(dashboard.listings.len(), 2);
        assert_eq!(dashboard.available_listings, 1);
        assert_eq!(dashboard.bookings.len(), 2);
        assert_eq!(dashboard.upcoming.len(), 1);
        assert_eq!(dashboard.total_revenue, 100.0);
        assert!((dashboard.average_rating - 4.7).abs() < 1e-9);
        assert_eq!(dashboard.top_rated[0].id, "1");
        assert_eq!(dashboard.recent_bookings.len(), 2);
    }

    #[test]
    fn host_without_listings_has_zero_stats() {
        let catalog = CatalogStore::seeded().unwrap();
        let ledger = BookingLedger::new();
        let dashboard = HostDashboard::build(&catalog, &ledger, "user1", now());
        assert!(dashboard.listings.is_empty());
        assert_eq!(dashboard.total_revenue, 0.0);
        assert_eq!(dashboard.average_rating, 0.0);
        assert!(dashboard.top_rated.is_empty());
    }
}
