//! Request DTOs for pricing API endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::{Addons, Duration};

/// Request for a live price quote
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub duration: Duration,
    #[serde(default = "default_party_size")]
    pub party_size: i64,
    /// Location whose rate applies; ignored when `base_per_person` is given
    #[serde(default)]
    pub location_id: Option<String>,
    /// Explicit per-person rate
    #[serde(default)]
    pub base_per_person: Option<Decimal>,
    #[serde(default)]
    pub addons: Addons,
}

fn default_party_size() -> i64 {
    1
}
