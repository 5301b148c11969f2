//! Booking confirmation emails.

pub mod mailer;
pub mod routes;
pub mod services;
pub mod summary;

pub use mailer::{build_mailer, DisabledMailer, MailError, Mailer, OutgoingEmail, SmtpMailer};
pub use services::send_booking_summary;
pub use summary::{render_booking_email, BookingSummary, SendBookingRequest};
