//! Request DTOs for the admin catalog endpoints.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;

use crate::pricing::{whole_price, whole_price_f64, Duration};

use super::models::{PricePerPerson, RawLocation, TourType};
use super::normalize::sanitize_price;

/// Request to add a tour type. The single label/description is used for
/// both languages.
#[derive(Debug, Deserialize)]
pub struct NewTourTypeRequest {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub description: String,
}

impl NewTourTypeRequest {
    pub fn into_tour_type(self, id: String) -> Result<TourType, String> {
        if self.label.trim().is_empty() {
            return Err("Please provide a tour type name.".to_string());
        }

        Ok(TourType {
            id,
            label_th: self.label.clone(),
            label_en: self.label,
            description_th: self.description.clone(),
            description_en: self.description,
        })
    }
}

/// Price inputs as typed into the admin form; strings or numbers
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PriceInputs {
    pub full: Option<Value>,
    pub half: Option<Value>,
}

impl PriceInputs {
    fn get(&self, duration: Duration) -> Option<&Value> {
        match duration {
            Duration::Full => self.full.as_ref(),
            Duration::Half => self.half.as_ref(),
        }
    }
}

/// Request to add a location
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewLocationRequest {
    pub name: String,
    pub area: String,
    pub image_path: String,
    /// Comma separated
    pub highlights: String,
    pub description: String,
    pub tour_type_ids: Vec<String>,
    pub available_durations: Vec<Duration>,
    pub price_per_person: PriceInputs,
}

impl NewLocationRequest {
    /// Build the record to store, validating required prices.
    pub fn into_raw_location(self, id: String) -> Result<RawLocation, String> {
        if self.name.trim().is_empty() {
            return Err("Please provide a location name.".to_string());
        }

        let highlights: Vec<String> = self
            .highlights
            .split(',')
            .map(str::trim)
            .filter(|h| !h.is_empty())
            .map(str::to_string)
            .collect();

        let mut tour_type_ids: Vec<String> = Vec::new();
        for tour_type_id in self.tour_type_ids.into_iter().filter(|id| !id.is_empty()) {
            if !tour_type_ids.contains(&tour_type_id) {
                tour_type_ids.push(tour_type_id);
            }
        }

        let mut available_durations: Vec<Duration> = Vec::new();
        for duration in self.available_durations {
            if !available_durations.contains(&duration) {
                available_durations.push(duration);
            }
        }

        let prices = build_price_payload(&self.price_per_person, &available_durations)?;

        Ok(RawLocation {
            id: Some(id),
            name_th: Some(self.name.clone()),
            name_en: Some(self.name),
            area_th: Some(self.area.clone()),
            area_en: Some(self.area),
            description_th: Some(self.description.clone()),
            description_en: Some(self.description),
            image_path: Some(self.image_path),
            highlights: Some(highlights),
            tour_type_ids: Some(tour_type_ids),
            available_durations: Some(
                available_durations
                    .iter()
                    .map(|d| d.as_str().to_string())
                    .collect(),
            ),
            price_per_person: Some(prices.to_json()),
        })
    }
}

/// Request to replace a location's prices
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdatePricesRequest {
    pub price_per_person: PriceInputs,
}

/// Parse a typed price: blank, non-numeric, or negative after rounding is
/// no price at all.
pub fn parse_price_input(input: &str) -> Option<i64> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    match Decimal::from_str(trimmed) {
        Ok(amount) => whole_price(amount),
        Err(_) => trimmed.parse::<f64>().ok().and_then(whole_price_f64),
    }
}

fn price_input(value: &Value) -> Option<i64> {
    match value {
        Value::String(s) => parse_price_input(s),
        other => sanitize_price(other),
    }
}

/// Collect valid prices; every required duration must have one. With no
/// available durations, both are required.
pub fn build_price_payload(
    inputs: &PriceInputs,
    available_durations: &[Duration],
) -> Result<PricePerPerson, String> {
    let mut prices = PricePerPerson::default();
    for duration in Duration::ALL {
        prices.set(duration, inputs.get(duration).and_then(price_input));
    }

    let required: &[Duration] = if available_durations.is_empty() {
        &Duration::ALL
    } else {
        available_durations
    };

    for duration in required {
        if prices.get(*duration).is_none() {
            return Err(format!(
                "Please provide a valid {} price.",
                duration.label_en()
            ));
        }
    }

    Ok(prices)
}
