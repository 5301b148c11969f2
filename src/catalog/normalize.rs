//! Location normalization.
//!
//! Fills in defaults for partially authored locations so filtering and
//! display never have to special-case missing data. Total and idempotent.

use serde_json::Value;

use crate::pricing::{whole_price_f64, Duration};

use super::models::{Location, PricePerPerson, RawLocation};

/// Normalize a raw location.
///
/// * no tour types → every id in `all_tour_type_ids`
/// * no (recognised) durations → both durations
/// * prices kept only when they round to a non-negative whole amount;
///   anything else is dropped, not zeroed
/// * missing text and list fields become empty
pub fn normalize_location(raw: &RawLocation, all_tour_type_ids: &[String]) -> Location {
    let tour_type_ids = match &raw.tour_type_ids {
        Some(ids) if !ids.is_empty() => ids.clone(),
        _ => all_tour_type_ids.to_vec(),
    };

    let mut available_durations: Vec<Duration> = Vec::new();
    for duration in raw
        .available_durations
        .iter()
        .flatten()
        .filter_map(|value| Duration::parse(value))
    {
        if !available_durations.contains(&duration) {
            available_durations.push(duration);
        }
    }
    if available_durations.is_empty() {
        available_durations = Duration::ALL.to_vec();
    }

    Location {
        id: text(&raw.id),
        name_th: text(&raw.name_th),
        name_en: text(&raw.name_en),
        area_th: text(&raw.area_th),
        area_en: text(&raw.area_en),
        description_th: text(&raw.description_th),
        description_en: text(&raw.description_en),
        image_path: text(&raw.image_path),
        highlights: raw.highlights.clone().unwrap_or_default(),
        tour_type_ids,
        available_durations,
        price_per_person: sanitize_price_map(raw.price_per_person.as_ref()),
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

/// Keep a raw price only if it is a number that rounds to a non-negative
/// whole amount.
pub fn sanitize_price(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };

    if let Some(whole) = number.as_i64() {
        return (whole >= 0).then_some(whole);
    }
    if let Some(whole) = number.as_u64() {
        return i64::try_from(whole).ok();
    }
    number.as_f64().and_then(whole_price_f64)
}

/// Sanitize a raw `{ "full": .., "half": .. }` map; non-objects yield no prices.
pub fn sanitize_price_map(value: Option<&Value>) -> PricePerPerson {
    let mut prices = PricePerPerson::default();
    let Some(Value::Object(map)) = value else {
        return prices;
    };

    for duration in Duration::ALL {
        prices.set(duration, map.get(duration.as_str()).and_then(sanitize_price));
    }
    prices
}
