//! Error handling for the application

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::booking::ValidationError;
use crate::notify::MailError;

/// Application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// User-facing validation message, returned as is
    #[error("{0}")]
    Validation(String),

    /// Booking form failure, tagged with the wizard step to return to
    #[error("{0}")]
    StepValidation(#[from] ValidationError),

    /// Booking insert failed; the guest sees a generic retry message
    #[error("Submission failed. Please try again.")]
    Submission(#[source] sqlx::Error),

    #[error("Admin credentials required")]
    Unauthorized,

    #[error("Mail delivery is not configured")]
    MailNotConfigured,

    /// Provider error; the message is passed through to the caller
    #[error("{0}")]
    Mail(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<MailError> for AppError {
    fn from(err: MailError) -> Self {
        match err {
            MailError::NotConfigured => AppError::MailNotConfigured,
            other => AppError::Mail(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "Not found".to_string()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::StepValidation(err) => {
                let body = json!({ "error": err.message, "step": err.step });
                return (StatusCode::BAD_REQUEST, Json(body)).into_response();
            }
            AppError::Submission(e) => {
                tracing::error!("Booking insert failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
            AppError::MailNotConfigured => {
                tracing::error!("Mail requested but SMTP_HOST/MAIL_FROM are not set");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Mail(msg) => {
                tracing::error!("Mail error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            AppError::Template(e) => {
                tracing::error!("Template error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Template error".to_string())
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error".to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::Validation("Date is required.".to_string()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::Unauthorized.into_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AppError::Internal("boom".to_string()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_step_validation_body() {
        use crate::booking::BookingStep;

        let err = AppError::from(ValidationError {
            step: BookingStep::Contact,
            message: "Invalid email address.".to_string(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Invalid email address.", "step": "contact" }));
    }

    #[test]
    fn test_submission_hides_database_detail() {
        let err = AppError::Submission(sqlx::Error::RowNotFound);
        assert_eq!(err.to_string(), "Submission failed. Please try again.");
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_mail_error_conversion() {
        assert!(matches!(AppError::from(MailError::NotConfigured), AppError::MailNotConfigured));

        let err = AppError::from(MailError::Rejected("550 mailbox unavailable".to_string()));
        assert_eq!(err.to_string(), "550 mailbox unavailable");
    }
}
