//! Guest bookings: form validation, price snapshot and storage.

pub mod models;
pub mod queries;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod validation;

pub use models::{Booking, Locale, NewBooking, PriceSnapshot};
pub use requests::{BookingForm, BookingListQuery};
pub use routes::{admin_router, router};
pub use services::{booking_summary, filter_bookings, prepare_booking, submit_booking};
pub use validation::{is_valid_email, validate_booking, BookingStep, ValidationError};
