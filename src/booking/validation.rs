//! Booking form validation.
//!
//! The form is a four-step wizard; each check reports the step it belongs to
//! so the form can jump back to it. The add-ons step has nothing to check.

use serde::Serialize;

use crate::catalog::{Catalog, Location};
use crate::pricing::{MAX_PARTY_SIZE, MIN_PARTY_SIZE};

use super::requests::BookingForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum BookingStep {
    TripDetails,
    Location,
    AddOns,
    Contact,
}

impl BookingStep {
    /// Zero-based position in the wizard
    pub fn index(self) -> usize {
        match self {
            BookingStep::TripDetails => 0,
            BookingStep::Location => 1,
            BookingStep::AddOns => 2,
            BookingStep::Contact => 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationError {
    pub step: BookingStep,
    pub message: String,
}

impl ValidationError {
    fn new(step: BookingStep, message: &str) -> Self {
        Self {
            step,
            message: message.to_string(),
        }
    }
}

/// `local@domain.tld`: no whitespace, a single `@`, and a dot inside the
/// domain with text on both sides.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Date, time, party size and tour type
pub fn validate_trip_details(form: &BookingForm) -> Result<(), ValidationError> {
    let step = BookingStep::TripDetails;
    if form.date.trim().is_empty() {
        return Err(ValidationError::new(step, "Date is required."));
    }
    if form.time.trim().is_empty() {
        return Err(ValidationError::new(step, "Time is required."));
    }
    if !(MIN_PARTY_SIZE..=MAX_PARTY_SIZE).contains(&form.party_size) {
        return Err(ValidationError::new(step, "Party size must be between 1 and 20."));
    }
    if form.tour_type.trim().is_empty() {
        return Err(ValidationError::new(step, "Tour type is required."));
    }
    Ok(())
}

/// Resolve the location for the chosen tour type and duration
pub fn validate_location<'a>(
    form: &BookingForm,
    catalog: &'a Catalog,
) -> Result<&'a Location, ValidationError> {
    let step = BookingStep::Location;
    let location = catalog
        .select_location(&form.tour_type, form.duration, &form.location_id)
        .ok_or_else(|| {
            ValidationError::new(step, "No locations match this tour type and duration yet.")
        })?;

    if location.id.is_empty() {
        return Err(ValidationError::new(step, "Please select a location."));
    }
    Ok(location)
}

/// Contact name and email
pub fn validate_contact(form: &BookingForm) -> Result<(), ValidationError> {
    let step = BookingStep::Contact;
    if form.contact_name.trim().is_empty() {
        return Err(ValidationError::new(step, "Contact name is required."));
    }
    if !is_valid_email(&form.contact_email) {
        return Err(ValidationError::new(step, "Invalid email address."));
    }
    Ok(())
}

/// Run every step in wizard order, stopping at the first failure
pub fn validate_booking<'a>(
    form: &BookingForm,
    catalog: &'a Catalog,
) -> Result<&'a Location, ValidationError> {
    validate_trip_details(form)?;
    let location = validate_location(form, catalog)?;
    validate_contact(form)?;
    Ok(location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{RawLocation, TourType};
    use crate::pricing::{Addons, Duration};
    use crate::booking::Locale;

    fn form() -> BookingForm {
        BookingForm {
            date: "2026-11-02".to_string(),
            time: "09:00".to_string(),
            party_size: 2,
            duration: Duration::Full,
            tour_type: "islands".to_string(),
            location_id: "phuket-cove".to_string(),
            addons: Addons::default(),
            contact_name: "Ploy".to_string(),
            contact_email: "ploy@example.co.th".to_string(),
            notes: String::new(),
            locale: Locale::Th,
        }
    }

    fn message(result: Result<(), ValidationError>) -> String {
        result.unwrap_err().message
    }

    #[test]
    fn test_is_valid_email() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.com"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("guest@localhost"));
        assert!(!is_valid_email("guest@.com"));
        assert!(!is_valid_email("guest@example."));
        assert!(!is_valid_email("gu est@example.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }

    #[test]
    fn test_trip_details_messages_in_order() {
        let mut f = form();
        f.date.clear();
        f.time.clear();
        assert_eq!(message(validate_trip_details(&f)), "Date is required.");

        let mut f = form();
        f.time.clear();
        assert_eq!(message(validate_trip_details(&f)), "Time is required.");

        for size in [0, 21, -3] {
            let mut f = form();
            f.party_size = size;
            assert_eq!(
                message(validate_trip_details(&f)),
                "Party size must be between 1 and 20."
            );
        }

        let mut f = form();
        f.tour_type.clear();
        assert_eq!(message(validate_trip_details(&f)), "Tour type is required.");

        assert!(validate_trip_details(&form()).is_ok());
    }

    #[test]
    fn test_location_must_match_tour_type_and_duration() {
        let catalog = Catalog::from_records(
            vec![TourType {
                id: "islands".to_string(),
                label_th: String::new(),
                label_en: "Islands & Sea".to_string(),
                description_th: String::new(),
                description_en: String::new(),
            }],
            vec![RawLocation {
                id: Some("krabi".to_string()),
                available_durations: Some(vec!["half".to_string()]),
                ..Default::default()
            }],
        );

        let err = validate_location(&form(), &catalog).unwrap_err();
        assert_eq!(err.step, BookingStep::Location);
        assert_eq!(err.message, "No locations match this tour type and duration yet.");

        let mut f = form();
        f.duration = Duration::Half;
        assert_eq!(validate_location(&f, &catalog).unwrap().id, "krabi");
    }

    #[test]
    fn test_blank_location_id_needs_selection() {
        let catalog = Catalog::from_records(
            Vec::new(),
            vec![RawLocation::default()],
        );
        let err = validate_location(&form(), &catalog).unwrap_err();
        assert_eq!(err.message, "Please select a location.");
    }

    #[test]
    fn test_contact() {
        let mut f = form();
        f.contact_name = "   ".to_string();
        assert_eq!(message(validate_contact(&f)), "Contact name is required.");

        let mut f = form();
        f.contact_email = "ploy-at-example".to_string();
        assert_eq!(message(validate_contact(&f)), "Invalid email address.");
    }

    #[test]
    fn test_validate_booking_reports_earliest_step() {
        let catalog = Catalog::defaults();
        let mut f = form();
        f.contact_email.clear();
        f.party_size = 40;

        let err = validate_booking(&f, &catalog).unwrap_err();
        assert_eq!(err.step, BookingStep::TripDetails);
        assert_eq!(err.step.index(), 0);

        let location = validate_booking(&form(), &catalog).unwrap();
        assert_eq!(location.id, "phuket-cove");
    }
}
