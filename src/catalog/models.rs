//! Catalog records: tour types and locations.
//!
//! `LocationRow` and `TourType` map directly to database rows. Location rows
//! may be partially authored, so they are read into a `RawLocation` and only
//! become a `Location` after normalization.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::pricing::Duration;

/// Tour category, e.g. "Islands & Sea"
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TourType {
    pub id: String,
    pub label_th: String,
    pub label_en: String,
    pub description_th: String,
    pub description_en: String,
}

/// Location row from the `locations` table; every column is nullable
#[derive(Debug, Clone, FromRow)]
pub struct LocationRow {
    pub id: String,
    pub name_th: Option<String>,
    pub name_en: Option<String>,
    pub area_th: Option<String>,
    pub area_en: Option<String>,
    pub description_th: Option<String>,
    pub description_en: Option<String>,
    pub image_path: Option<String>,
    pub highlights: Option<serde_json::Value>,
    pub tour_type_ids: Option<serde_json::Value>,
    pub available_durations: Option<serde_json::Value>,
    pub price_per_person: Option<serde_json::Value>,
}

/// Location as authored, before defaults are filled in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLocation {
    pub id: Option<String>,
    pub name_th: Option<String>,
    pub name_en: Option<String>,
    pub area_th: Option<String>,
    pub area_en: Option<String>,
    pub description_th: Option<String>,
    pub description_en: Option<String>,
    pub image_path: Option<String>,
    pub highlights: Option<Vec<String>>,
    pub tour_type_ids: Option<Vec<String>>,
    pub available_durations: Option<Vec<String>>,
    pub price_per_person: Option<serde_json::Value>,
}

impl From<LocationRow> for RawLocation {
    fn from(row: LocationRow) -> Self {
        Self {
            id: Some(row.id),
            name_th: row.name_th,
            name_en: row.name_en,
            area_th: row.area_th,
            area_en: row.area_en,
            description_th: row.description_th,
            description_en: row.description_en,
            image_path: row.image_path,
            highlights: string_list(row.highlights),
            tour_type_ids: string_list(row.tour_type_ids),
            available_durations: string_list(row.available_durations),
            price_per_person: row.price_per_person,
        }
    }
}

/// Read a JSON array of strings, skipping anything that is not a string.
fn string_list(value: Option<serde_json::Value>) -> Option<Vec<String>> {
    match value? {
        serde_json::Value::Array(items) => Some(
            items
                .into_iter()
                .filter_map(|item| match item {
                    serde_json::Value::String(s) => Some(s),
                    _ => None,
                })
                .collect(),
        ),
        _ => None,
    }
}

/// Per-duration price override; an absent entry means "use the fallback rate"
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePerPerson {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub half: Option<i64>,
}

impl PricePerPerson {
    pub fn get(&self, duration: Duration) -> Option<i64> {
        match duration {
            Duration::Full => self.full,
            Duration::Half => self.half,
        }
    }

    pub fn set(&mut self, duration: Duration, price: Option<i64>) {
        match duration {
            Duration::Full => self.full = price,
            Duration::Half => self.half = price,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({}))
    }
}

/// Fully populated location, safe to filter and render without special cases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name_th: String,
    pub name_en: String,
    pub area_th: String,
    pub area_en: String,
    pub description_th: String,
    pub description_en: String,
    pub image_path: String,
    pub highlights: Vec<String>,
    pub tour_type_ids: Vec<String>,
    pub available_durations: Vec<Duration>,
    pub price_per_person: PricePerPerson,
}

impl Location {
    /// Whether this location can be booked for the given tour type and duration
    pub fn offers(&self, tour_type: &str, duration: Duration) -> bool {
        self.tour_type_ids.iter().any(|id| id == tour_type)
            && self.available_durations.contains(&duration)
    }
}

impl From<&Location> for RawLocation {
    fn from(location: &Location) -> Self {
        Self {
            id: Some(location.id.clone()),
            name_th: Some(location.name_th.clone()),
            name_en: Some(location.name_en.clone()),
            area_th: Some(location.area_th.clone()),
            area_en: Some(location.area_en.clone()),
            description_th: Some(location.description_th.clone()),
            description_en: Some(location.description_en.clone()),
            image_path: Some(location.image_path.clone()),
            highlights: Some(location.highlights.clone()),
            tour_type_ids: Some(location.tour_type_ids.clone()),
            available_durations: Some(
                location
                    .available_durations
                    .iter()
                    .map(|d| d.as_str().to_string())
                    .collect(),
            ),
            price_per_person: Some(location.price_per_person.to_json()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_row_conversion_skips_non_string_items() {
        let row = LocationRow {
            id: "krabi".to_string(),
            name_th: None,
            name_en: Some("Krabi".to_string()),
            area_th: None,
            area_en: None,
            description_th: None,
            description_en: None,
            image_path: None,
            highlights: Some(json!(["Kayak", 3, null, "Beach picnic"])),
            tour_type_ids: Some(json!("islands")),
            available_durations: None,
            price_per_person: Some(json!({"full": 2800})),
        };

        let raw = RawLocation::from(row);
        assert_eq!(raw.id.as_deref(), Some("krabi"));
        assert_eq!(
            raw.highlights,
            Some(vec!["Kayak".to_string(), "Beach picnic".to_string()])
        );
        assert_eq!(raw.tour_type_ids, None);
        assert_eq!(raw.price_per_person, Some(json!({"full": 2800})));
    }

    #[test]
    fn test_price_per_person_serializes_only_present_keys() {
        let prices = PricePerPerson {
            full: Some(3000),
            half: None,
        };
        assert_eq!(prices.to_json(), json!({"full": 3000}));
        assert_eq!(prices.get(Duration::Half), None);
    }

    #[test]
    fn test_location_offers() {
        let location = Location {
            id: "ayutthaya".to_string(),
            name_th: String::new(),
            name_en: "Ayutthaya Heritage".to_string(),
            area_th: String::new(),
            area_en: String::new(),
            description_th: String::new(),
            description_en: String::new(),
            image_path: String::new(),
            highlights: vec![],
            tour_type_ids: vec!["heritage".to_string()],
            available_durations: vec![Duration::Half],
            price_per_person: PricePerPerson::default(),
        };

        assert!(location.offers("heritage", Duration::Half));
        assert!(!location.offers("heritage", Duration::Full));
        assert!(!location.offers("islands", Duration::Half));
    }
}
