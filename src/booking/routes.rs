//! Booking route handlers

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::catalog::load_catalog;
use crate::error::{AppError, Result};
use crate::notify::send_booking_summary;
use crate::AppState;

use super::models::Booking;
use super::queries;
use super::requests::{BookingForm, BookingListQuery};
use super::responses::BookingConfirmation;
use super::services::{booking_summary, filter_bookings, submit_booking};

/// Public booking routes
pub fn router() -> Router<AppState> {
    Router::new().route("/api/bookings", post(submit))
}

/// Admin booking routes; the caller layers the admin gate on top
pub fn admin_router() -> Router<AppState> {
    Router::new()
        .route("/api/admin/bookings", get(list))
        .route("/api/admin/bookings/:id/email", post(email))
}

/// Submit a booking from the public form
pub async fn submit(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BookingForm>, JsonRejection>,
) -> Result<(StatusCode, Json<BookingConfirmation>)> {
    let Json(form) =
        payload.map_err(|_| AppError::Validation("Invalid JSON payload".to_string()))?;

    let catalog = load_catalog(&state.db, &state.cache).await;
    let confirmation = submit_booking(&state.db, &catalog, &form).await?;

    Ok((StatusCode::CREATED, Json(confirmation)))
}

/// Admin booking table, newest first
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<BookingListQuery>,
) -> Result<Json<Vec<Booking>>> {
    let bookings = queries::list_bookings(&state.db).await?;
    Ok(Json(filter_bookings(bookings, &query)))
}

/// Mail a stored booking's summary to its contact address
pub async fn email(State(state): State<AppState>, Path(id): Path<Uuid>) -> Result<Json<Value>> {
    let booking = queries::get_booking(&state.db, id).await?;
    let catalog = load_catalog(&state.db, &state.cache).await;
    let summary = booking_summary(&booking, &catalog);

    send_booking_summary(state.mailer.as_ref(), &booking.contact_email, &summary).await?;

    Ok(Json(json!({ "ok": true })))
}
