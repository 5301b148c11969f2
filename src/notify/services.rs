//! Booking email dispatch.

use tracing::info;

use crate::booking::is_valid_email;
use crate::error::{AppError, Result};

use super::mailer::{Mailer, OutgoingEmail};
use super::summary::{render_booking_email, BookingSummary, BOOKING_EMAIL_SUBJECT};

/// Validate the recipient, render the summary and hand it to the mailer.
///
/// No retry: a provider failure is returned to the caller with the
/// provider's message.
pub async fn send_booking_summary(
    mailer: &dyn Mailer,
    to: &str,
    summary: &BookingSummary,
) -> Result<String> {
    if !is_valid_email(to) {
        return Err(AppError::Validation("Invalid recipient email".to_string()));
    }

    let text = render_booking_email(summary)?;
    let receipt = mailer
        .send(OutgoingEmail {
            to: to.to_string(),
            subject: BOOKING_EMAIL_SUBJECT.to_string(),
            text,
        })
        .await?;

    info!("Booking email sent to {} ({})", to, receipt);
    Ok(receipt)
}
