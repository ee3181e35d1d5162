//! Quote computation for a prospective stay.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Flat fee added to every stay
pub const CLEANING_FEE: f64 = 25.0;

/// Share of the subtotal charged as service fee, rounded to a whole unit
pub const SERVICE_FEE_RATE: f64 = 0.12;

/// Price breakdown shown before a booking is confirmed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub nights: u32,
    pub subtotal: f64,
    pub cleaning_fee: f64,
    pub service_fee: f64,
    pub total: f64,
}

/// Number of billed nights between two dates, if positive.
///
/// Calendar dates carry no time of day, so the day difference is already
/// whole and needs no ceiling.
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> Option<u32> {
    let days = (check_out - check_in).num_days();
    if days <= 0 {
        return None;
    }
    u32::try_from(days).ok()
}

/// Compute a quote, or `None` when dates are missing or the range is empty.
///
/// `None` means "no price yet": the caller keeps the confirm action disabled.
pub fn compute_quote(
    nightly_price: f64,
    check_in: Option<NaiveDate>,
    check_out: Option<NaiveDate>,
) -> Option<Quote> {
    let nights = nights_between(check_in?, check_out?)?;
    Some(quote_for_nights(nightly_price, nights))
}

/// Breakdown for a known positive number of nights
pub fn quote_for_nights(nightly_price: f64, nights: u32) -> Quote {
    let subtotal = f64::from(nights) * nightly_price;
    // subtotal is non-negative, so round() matches half-up rounding
    let service_fee = (subtotal * SERVICE_FEE_RATE).round();
    Quote {
        nights,
        subtotal,
        cleaning_fee: CLEANING_FEE,
        service_fee,
        total: subtotal + CLEANING_FEE + service_fee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn three_nights_at_180() {
        let quote = compute_quote(180.0, date(2024, 6, 1), date(2024, 6, 4)).unwrap();
        assert_eq!(quote.nights, 3);
        assert_eq!(quote.subtotal, 540.0);
        assert_eq!(quote.cleaning_fee, 25.0);
        assert_eq!(quote.service_fee, 65.0);
        assert_eq!(quote.total, 630.0);
    }

    #[test]
    fn empty_or_reversed_range_has_no_quote() {
        assert!(compute_quote(180.0, date(2024, 6, 4), date(2024, 6, 4)).is_none());
        assert!(compute_quote(180.0, date(2024, 6, 4), date(2024, 6, 1)).is_none());
        assert!(compute_quote(180.0, None, date(2024, 6, 1)).is_none());
        assert!(compute_quote(180.0, date(2024, 6, 1), None).is_none());
    }

    #[test]
    fn service_fee_rounds_to_nearest_unit() {
        assert_eq!(quote_for_nights(104.0, 1).service_fee, 12.0);
        assert_eq!(quote_for_nights(105.0, 1).service_fee, 13.0);
        assert_eq!(quote_for_nights(95.0, 2).service_fee, 23.0);
    }

    #[test]
    fn subtotal_keeps_fractional_price() {
        let quote = quote_for_nights(99.99, 2);
        assert!((quote.subtotal - 199.98).abs() < 1e-9);
        assert_eq!(quote.service_fee, 24.0);
        assert!((quote.total - (199.98 + 25.0 + 24.0)).abs() < 1e-9);
    }

    #[test]
    fn total_matches_formula_and_is_monotonic() {
        let prices = [1.0, 49.5, 95.0, 120.0, 180.0, 350.0];
        for &price in &prices {
            let mut previous = 0.0;
            for nights in 1..=30 {
                let quote = quote_for_nights(price, nights);
                let subtotal = f64::from(nights) * price;
                let expected = subtotal + 25.0 + (0.12 * subtotal).round();
                assert_eq!(quote.total, expected);
                assert!(quote.total >= previous);
                previous = quote.total;
            }
        }
        for nights in 1..=10 {
            let mut previous = 0.0;
            for &price in &prices {
                let total = quote_for_nights(price, nights).total;
                assert!(total >= previous);
                previous = total;
            }
        }
    }

    #[test]
    fn crossing_month_boundary() {
        assert_eq!(nights_between(date(2024, 2, 28).unwrap(), date(2024, 3, 2).unwrap()), Some(3));
    }
}
