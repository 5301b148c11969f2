//! Booking summary email: request payload and plain-text body.

use askama::Template;
use serde::{Deserialize, Serialize};

use crate::pricing::{format_thb, Addons, Duration};

pub const BOOKING_EMAIL_SUBJECT: &str = "Tour booking details";

/// Booking details to mail; every field is optional and renders as `-`
/// when missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingSummary {
    pub contact_name: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub duration: Option<String>,
    pub tour_type_label_en: Option<String>,
    pub location_name_en: Option<String>,
    pub party_size: Option<i64>,
    pub addons: Option<Addons>,
    pub price_total: Option<i64>,
    pub notes: Option<String>,
}

/// Request to mail a booking summary
#[derive(Debug, Deserialize)]
pub struct SendBookingRequest {
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub booking: Option<BookingSummary>,
    #[serde(default)]
    pub locale: Option<String>,
}

#[derive(Template)]
#[template(path = "email/booking.txt")]
struct BookingEmailTemplate {
    name: String,
    date: String,
    time: String,
    duration: String,
    tour_type: String,
    location: String,
    party_size: String,
    addons: String,
    total: String,
    notes: String,
}

fn or_dash(value: &Option<String>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.clone(),
        _ => "-".to_string(),
    }
}

/// "Full day" / "Half day" for known durations, the raw value otherwise
pub fn duration_label(duration: Option<&str>) -> String {
    match duration {
        Some(raw) => Duration::parse(raw)
            .map(|d| d.label_en().to_string())
            .unwrap_or_else(|| raw.to_string()),
        None => "-".to_string(),
    }
}

/// Selected add-ons joined by ", ", or "-" when none
pub fn addons_label(addons: Option<&Addons>) -> String {
    let addons = addons.copied().unwrap_or_default();
    let selected: Vec<&str> = [
        (addons.guide, "Guide"),
        (addons.meals, "Meals"),
        (addons.pickup, "Pickup"),
    ]
    .iter()
    .filter(|(on, _)| *on)
    .map(|(_, label)| *label)
    .collect();

    if selected.is_empty() {
        "-".to_string()
    } else {
        selected.join(", ")
    }
}

/// Render the plain-text email body
pub fn render_booking_email(summary: &BookingSummary) -> Result<String, askama::Error> {
    BookingEmailTemplate {
        name: or_dash(&summary.contact_name),
        date: or_dash(&summary.date),
        time: or_dash(&summary.time),
        duration: duration_label(summary.duration.as_deref()),
        tour_type: or_dash(&summary.tour_type_label_en),
        location: or_dash(&summary.location_name_en),
        party_size: summary
            .party_size
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string()),
        addons: addons_label(summary.addons.as_ref()),
        total: format_thb(summary.price_total.unwrap_or(0)),
        notes: or_dash(&summary.notes),
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_full_summary() {
        let summary = BookingSummary {
            contact_name: Some("Somchai".to_string()),
            date: Some("2026-11-02".to_string()),
            time: Some("08:30".to_string()),
            duration: Some("half".to_string()),
            tour_type_label_en: Some("Islands & Sea".to_string()),
            location_name_en: Some("Krabi Cliffs & Coves".to_string()),
            party_size: Some(3),
            addons: Some(Addons {
                guide: true,
                meals: false,
                pickup: true,
            }),
            price_total: Some(8000),
            notes: Some("Vegetarian lunch".to_string()),
        };

        let body = render_booking_email(&summary).unwrap();
        let expected = [
            "Booking details",
            "Name: Somchai",
            "Date: 2026-11-02",
            "Time: 08:30",
            "Duration: Half day",
            "Tour type: Islands & Sea",
            "Location: Krabi Cliffs & Coves",
            "Party size: 3",
            "Add-ons: Guide, Pickup",
            "Total: ฿8,000",
            "Notes: Vegetarian lunch",
        ]
        .join("\n");
        assert_eq!(body.trim_end(), expected);
    }

    #[test]
    fn test_render_missing_fields_as_dashes() {
        let body = render_booking_email(&BookingSummary::default()).unwrap();

        assert!(body.contains("Name: -\n"));
        assert!(body.contains("Duration: -\n"));
        assert!(body.contains("Party size: -\n"));
        assert!(body.contains("Add-ons: -\n"));
        assert!(body.contains("Total: ฿0\n"));
        assert!(body.trim_end().ends_with("Notes: -"));
    }

    #[test]
    fn test_duration_label() {
        assert_eq!(duration_label(Some("full")), "Full day");
        assert_eq!(duration_label(Some("overnight")), "overnight");
        assert_eq!(duration_label(None), "-");
    }
}
