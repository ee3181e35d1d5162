use anyhow::Context;
use chrono::{Days, Utc};
use stay_booking::auth::{Authenticator, MockAuthenticator, Session};
use stay_booking::catalog::{CatalogStore, SearchParams, SortKey};
use stay_booking::checkout::{BookingRequest, Checkout, SimulatedProcessor};
use stay_booking::config::AppConfig;
use stay_booking::dashboard::{GuestDashboard, HostDashboard};
use stay_booking::ledger::BookingLedger;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("🏠 Stay Booking - storefront demo");

    let catalog = match &config.catalog_path {
        Some(path) => CatalogStore::from_json_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path))?,
        None => CatalogStore::seeded().context("Built-in catalog is invalid")?,
    };
    let ledger = BookingLedger::shared();
    let auth = MockAuthenticator::new(config.auth_delay());
    let checkout = Checkout::new(
        ledger.clone(),
        Box::new(SimulatedProcessor::new(config.booking_delay())),
        config.booking_timeout(),
    );
    info!("Using {} accounts, {} listings", auth.backend_name(), catalog.len());

    // Browse
    let results = catalog.search_sorted(&SearchParams::query("new york"), SortKey::PriceLow);
    info!("Found {} properties", results.len());
    for (i, property) in results.iter().enumerate() {
        let amenities: Vec<String> = property.amenities.iter().map(|a| a.display().label).collect();
        println!("{}. {} ({} / night)", i + 1, property.title, property.price);
        println!("   {} · ★ {} ({} reviews)", property.location, property.rating, property.reviews);
        println!("   Amenities: {}", amenities.join(", "));
    }

    // Book the first result two weeks out
    let mut session = Session::new();
    session
        .login(&auth, "john@example.com", "demo")
        .await
        .context("Demo login failed")?;

    let Some(property) = results.first().cloned() else {
        warn!("Nothing to book");
        return Ok(());
    };
    let today = Utc::now().date_naive();
    let check_in = today + Days::new(14);
    let check_out = check_in + Days::new(3);
    let request = BookingRequest::new(property)
        .with_dates(check_in, check_out)
        .with_guests(2);

    if let Some(quote) = request.quote() {
        println!();
        println!("{} nights × {} = {}", quote.nights, request.property.price, quote.subtotal);
        println!("Cleaning fee: {}", quote.cleaning_fee);
        println!("Service fee: {}", quote.service_fee);
        println!("Total: {}", quote.total);
    }

    match checkout.confirm(&session, &request).await {
        Ok(booking) => info!("✅ Booked {} ({})", booking.property.title, booking.id),
        Err(e) if e.is_retryable() => warn!("Booking failed, try again: {}", e),
        Err(e) => warn!("Booking not possible: {}", e),
    }

    // Dashboards
    let ledger = ledger.lock().await;
    let now = Utc::now();
    if let Some(user) = session.user() {
        let guest = GuestDashboard::build(&ledger, &user.id, now);
        info!(
            "{}: {} bookings, {} upcoming, {} past",
            user.name,
            guest.bookings.len(),
            guest.upcoming.len(),
            guest.past.len()
        );
    }
    let host = HostDashboard::build(&catalog, &ledger, &request.property.host_id, now);
    info!(
        "Host {}: {} listings, revenue {}, average rating {:.2}",
        request.property.host_name,
        host.listings.len(),
        host.total_revenue,
        host.average_rating
    );

    let json = serde_json::to_string_pretty(ledger.bookings())?;
    tokio::fs::write(&config.output_path, json)
        .await
        .with_context(|| format!("Failed to write {}", config.output_path))?;
    info!("💾 Saved {} bookings to {}", ledger.len(), config.output_path);

    Ok(())
}
