//! Booking records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::pricing::{Addons, BaseSource, Duration};

/// Language the guest booked in
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    Th,
    #[default]
    En,
}

impl Locale {
    pub fn as_str(self) -> &'static str {
        match self {
            Locale::Th => "th",
            Locale::En => "en",
        }
    }
}

/// Price as computed at submission time. Stored as a snapshot and never
/// re-derived on read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PriceSnapshot {
    pub base: i64,
    pub addons: i64,
    pub total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_per_person: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_source: Option<BaseSource>,
}

/// Validated booking ready to insert
#[derive(Debug, Clone, PartialEq)]
pub struct NewBooking {
    pub date: String,
    pub time: String,
    pub party_size: i32,
    pub duration: Duration,
    pub tour_type: String,
    pub location_id: String,
    pub addons: Addons,
    pub price: PriceSnapshot,
    pub contact_name: String,
    pub contact_email: String,
    pub notes: String,
    pub locale: Locale,
}

/// Row from the `bookings` table
#[derive(Debug, Clone, FromRow)]
pub struct BookingRow {
    pub id: Uuid,
    pub created_at: Option<DateTime<Utc>>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub party_size: Option<i32>,
    pub duration: Option<String>,
    pub tour_type: Option<String>,
    pub location_id: Option<String>,
    pub addons: Option<serde_json::Value>,
    pub price: Option<serde_json::Value>,
    pub contact_name: Option<String>,
    pub contact_email: Option<String>,
    pub notes: Option<String>,
    pub locale: Option<String>,
}

/// Booking as shown in the admin table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub created_at: Option<DateTime<Utc>>,
    pub date: String,
    pub time: String,
    pub party_size: i64,
    pub duration: String,
    pub tour_type: String,
    pub location_id: String,
    pub addons: Addons,
    pub price: PriceSnapshot,
    pub contact_name: String,
    pub contact_email: String,
    pub notes: String,
    pub locale: String,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        Self {
            id: row.id,
            created_at: row.created_at,
            date: row.date.unwrap_or_default(),
            time: row.time.unwrap_or_default(),
            party_size: row.party_size.map(i64::from).unwrap_or(0),
            duration: row.duration.unwrap_or_default(),
            tour_type: row.tour_type.unwrap_or_default(),
            location_id: row.location_id.unwrap_or_default(),
            addons: row
                .addons
                .and_then(|v| serde_json::from_value(v).ok())
                .unwrap_or_default(),
            price: row
                .price
                .and_then(|v| serde_json::from_value(v).ok())
                .unwrap_or_default(),
            contact_name: row.contact_name.unwrap_or_default(),
            contact_email: row.contact_email.unwrap_or_default(),
            notes: row.notes.unwrap_or_default(),
            locale: row
                .locale
                .filter(|l| !l.is_empty())
                .unwrap_or_else(|| Locale::Th.as_str().to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn empty_row() -> BookingRow {
        BookingRow {
            id: Uuid::nil(),
            created_at: None,
            date: None,
            time: None,
            party_size: None,
            duration: None,
            tour_type: None,
            location_id: None,
            addons: None,
            price: None,
            contact_name: None,
            contact_email: None,
            notes: None,
            locale: None,
        }
    }

    #[test]
    fn test_missing_fields_read_back_with_defaults() {
        let booking = Booking::from(empty_row());

        assert_eq!(booking.date, "");
        assert_eq!(booking.party_size, 0);
        assert_eq!(booking.addons, Addons::default());
        assert_eq!(booking.price.total, 0);
        assert_eq!(booking.locale, "th");
    }

    #[test]
    fn test_partial_json_columns() {
        let row = BookingRow {
            addons: Some(json!({"pickup": true})),
            price: Some(json!({"total": 8000, "baseSource": "location"})),
            locale: Some("en".to_string()),
            ..empty_row()
        };

        let booking = Booking::from(row);
        assert!(booking.addons.pickup);
        assert!(!booking.addons.guide);
        assert_eq!(booking.price.total, 8000);
        assert_eq!(booking.price.base, 0);
        assert_eq!(booking.price.base_source, Some(BaseSource::Location));
        assert_eq!(booking.locale, "en");
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = PriceSnapshot {
            base: 4500,
            addons: 3500,
            total: 8000,
            base_per_person: Some(1500),
            base_source: Some(BaseSource::Fallback),
        };
        assert_eq!(
            serde_json::to_value(snapshot).unwrap(),
            json!({
                "base": 4500,
                "addons": 3500,
                "total": 8000,
                "basePerPerson": 1500,
                "baseSource": "fallback"
            })
        );
    }
}
