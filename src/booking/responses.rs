//! Response DTOs for booking endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::pricing::responses::QuoteResponse;

pub const SUBMISSION_RECEIVED: &str =
    "Submission received. Our team will contact you within 24 hours.";

/// Returned after a booking is stored
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub message: &'static str,
    pub price: QuoteResponse,
}
