//! Request DTOs for booking endpoints.

use serde::Deserialize;

use crate::pricing::{Addons, Duration};

use super::models::Locale;

fn default_party_size() -> i64 {
    2
}

fn default_duration() -> Duration {
    Duration::Full
}

/// Booking form as submitted by the guest
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingForm {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default = "default_party_size")]
    pub party_size: i64,
    #[serde(default = "default_duration")]
    pub duration: Duration,
    #[serde(default)]
    pub tour_type: String,
    #[serde(default)]
    pub location_id: String,
    #[serde(default)]
    pub addons: Addons,
    #[serde(default)]
    pub contact_name: String,
    #[serde(default)]
    pub contact_email: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub locale: Locale,
}

/// Admin booking list filters
#[derive(Debug, Default, Deserialize)]
pub struct BookingListQuery {
    /// Case-insensitive match against contact name and email
    #[serde(default)]
    pub q: Option<String>,
    /// Exact booking date
    #[serde(default)]
    pub date: Option<String>,
}
