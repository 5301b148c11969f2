//! Email route handlers

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::{json, Value};

use crate::error::{AppError, Result};
use crate::AppState;

use super::services::send_booking_summary;
use super::summary::SendBookingRequest;

/// Mail a booking summary to a recipient
pub async fn send_booking(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SendBookingRequest>, JsonRejection>,
) -> Result<Json<Value>> {
    let Json(request) =
        payload.map_err(|_| AppError::Validation("Invalid JSON payload".to_string()))?;

    if !crate::booking::is_valid_email(&request.to) {
        return Err(AppError::Validation("Invalid recipient email".to_string()));
    }
    let Some(booking) = request.booking else {
        return Err(AppError::Validation("Missing booking data".to_string()));
    };

    send_booking_summary(state.mailer.as_ref(), &request.to, &booking).await?;

    Ok(Json(json!({ "ok": true })))
}
