//! Database queries for bookings

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, Result};

use super::models::{Booking, BookingRow, NewBooking};

/// Insert a booking; the id and timestamp are assigned here, not by the client
pub async fn insert_booking(
    pool: &PgPool,
    booking: &NewBooking,
) -> std::result::Result<(Uuid, DateTime<Utc>), sqlx::Error> {
    let id = Uuid::new_v4();
    let created_at: DateTime<Utc> = sqlx::query_scalar(
        r#"
        INSERT INTO bookings (
            id, date, time, party_size, duration, tour_type, location_id,
            addons, price, contact_name, contact_email, notes, locale
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
        RETURNING created_at
        "#,
    )
    .bind(id)
    .bind(&booking.date)
    .bind(&booking.time)
    .bind(booking.party_size)
    .bind(booking.duration.as_str())
    .bind(&booking.tour_type)
    .bind(&booking.location_id)
    .bind(Json(&booking.addons))
    .bind(Json(&booking.price))
    .bind(&booking.contact_name)
    .bind(&booking.contact_email)
    .bind(&booking.notes)
    .bind(booking.locale.as_str())
    .fetch_one(pool)
    .await?;

    Ok((id, created_at))
}

const BOOKING_COLUMNS: &str = r#"
    id, created_at, date, time, party_size, duration, tour_type, location_id,
    addons, price, contact_name, contact_email, notes, locale
"#;

/// All bookings, newest first
pub async fn list_bookings(pool: &PgPool) -> Result<Vec<Booking>> {
    let rows = sqlx::query_as::<_, BookingRow>(&format!(
        "SELECT {} FROM bookings ORDER BY created_at DESC NULLS LAST",
        BOOKING_COLUMNS
    ))
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Booking::from).collect())
}

pub async fn get_booking(pool: &PgPool, id: Uuid) -> Result<Booking> {
    let row = sqlx::query_as::<_, BookingRow>(&format!(
        "SELECT {} FROM bookings WHERE id = $1",
        BOOKING_COLUMNS
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(AppError::NotFound)?;

    Ok(Booking::from(row))
}
