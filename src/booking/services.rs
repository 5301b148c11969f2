//! Booking submission and admin helpers.

use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use crate::catalog::Catalog;
use crate::error::{AppError, Result};
use crate::notify::BookingSummary;
use crate::pricing::responses::QuoteResponse;
use crate::pricing::{calculate_price, resolve_base_rate};

use super::models::{Booking, NewBooking, PriceSnapshot};
use super::queries;
use super::requests::{BookingForm, BookingListQuery};
use super::responses::{BookingConfirmation, SUBMISSION_RECEIVED};
use super::validation::{validate_booking, ValidationError};

/// Validated booking plus the quote it was priced with
#[derive(Debug)]
pub struct PreparedBooking {
    pub booking: NewBooking,
    pub quote: QuoteResponse,
}

/// Validate the form and price it against the catalog.
///
/// The location is re-resolved here so a stale or missing `locationId`
/// lands on the first location matching the tour type and duration.
pub fn prepare_booking(
    form: &BookingForm,
    catalog: &Catalog,
) -> std::result::Result<PreparedBooking, ValidationError> {
    let location = validate_booking(form, catalog)?;
    let rate = resolve_base_rate(Some(location), form.duration);
    let breakdown = calculate_price(
        form.duration,
        Decimal::from(rate.base_per_person),
        form.party_size,
        form.addons,
    );

    let booking = NewBooking {
        date: form.date.trim().to_string(),
        time: form.time.trim().to_string(),
        // Range-checked by validation
        party_size: form.party_size as i32,
        duration: form.duration,
        tour_type: form.tour_type.trim().to_string(),
        location_id: location.id.clone(),
        addons: form.addons,
        price: PriceSnapshot {
            base: breakdown.base,
            addons: breakdown.addons,
            total: breakdown.total,
            base_per_person: Some(rate.base_per_person),
            base_source: Some(rate.base_source),
        },
        contact_name: form.contact_name.trim().to_string(),
        contact_email: form.contact_email.trim().to_string(),
        notes: form.notes.trim().to_string(),
        locale: form.locale,
    };

    Ok(PreparedBooking {
        booking,
        quote: QuoteResponse::new(breakdown, rate.base_per_person, rate.base_source),
    })
}

/// Validate, price and store a booking
pub async fn submit_booking(
    pool: &PgPool,
    catalog: &Catalog,
    form: &BookingForm,
) -> Result<BookingConfirmation> {
    let prepared = prepare_booking(form, catalog)?;
    let (id, created_at) = queries::insert_booking(pool, &prepared.booking)
        .await
        .map_err(AppError::Submission)?;

    info!(
        "Booking {} stored: {} x{} at {} ({})",
        id,
        prepared.booking.duration,
        prepared.booking.party_size,
        prepared.booking.location_id,
        prepared.quote.total_formatted
    );

    Ok(BookingConfirmation {
        id,
        created_at,
        message: SUBMISSION_RECEIVED,
        price: prepared.quote,
    })
}

/// Apply the admin table filters: free text over name and email, exact date
pub fn filter_bookings(bookings: Vec<Booking>, query: &BookingListQuery) -> Vec<Booking> {
    let needle = query
        .q
        .as_deref()
        .map(|q| q.trim().to_lowercase())
        .filter(|q| !q.is_empty());
    let date = query.date.as_deref().map(str::trim).filter(|d| !d.is_empty());

    bookings
        .into_iter()
        .filter(|b| {
            let text_ok = needle.as_ref().map_or(true, |needle| {
                format!("{} {}", b.contact_name, b.contact_email)
                    .to_lowercase()
                    .contains(needle.as_str())
            });
            let date_ok = date.map_or(true, |date| b.date == date);
            text_ok && date_ok
        })
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Email summary for a stored booking. Tour type and location fall back to
/// their raw ids when the catalog no longer has them.
pub fn booking_summary(booking: &Booking, catalog: &Catalog) -> BookingSummary {
    let tour_type_label = catalog
        .tour_type(&booking.tour_type)
        .map(|t| t.label_en.clone())
        .filter(|label| !label.is_empty())
        .unwrap_or_else(|| booking.tour_type.clone());
    let location_name = catalog
        .location(&booking.location_id)
        .map(|l| l.name_en.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| booking.location_id.clone());

    BookingSummary {
        contact_name: non_empty(&booking.contact_name),
        date: non_empty(&booking.date),
        time: non_empty(&booking.time),
        duration: non_empty(&booking.duration),
        tour_type_label_en: non_empty(&tour_type_label),
        location_name_en: non_empty(&location_name),
        party_size: Some(booking.party_size),
        addons: Some(booking.addons),
        price_total: Some(booking.price.total),
        notes: non_empty(&booking.notes),
    }
}
