//! Outgoing mail.
//!
//! Handlers only see the `Mailer` trait; `main` decides which implementation
//! to inject based on configuration.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use tracing::info;

use crate::config::MailConfig;

/// A plain-text email
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Mail delivery is not configured")]
    NotConfigured,

    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// Provider refused or failed to deliver; carries the provider message
    #[error("{0}")]
    Rejected(String),
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Send the email, returning the provider's acknowledgement
    async fn send(&self, email: OutgoingEmail) -> Result<String, MailError>;
}

/// Used when no SMTP relay is configured; every send fails
pub struct DisabledMailer;

#[async_trait]
impl Mailer for DisabledMailer {
    async fn send(&self, _email: OutgoingEmail) -> Result<String, MailError> {
        Err(MailError::NotConfigured)
    }
}

/// SMTP delivery through lettre's async transport
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &MailConfig) -> anyhow::Result<Self> {
        let host = config.smtp_host.as_deref().context("SMTP_HOST is not set")?;
        let from = config
            .from
            .as_deref()
            .context("MAIL_FROM is not set")?
            .parse::<Mailbox>()
            .context("Failed to parse MAIL_FROM")?;

        info!("📧 Initializing SMTP mailer for {}:{}", host, config.smtp_port);

        let mut builder = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
            .context("Failed to create SMTP relay")?
            .port(config.smtp_port);
        if let (Some(username), Some(password)) = (&config.smtp_username, &config.smtp_password) {
            builder = builder.credentials(Credentials::new(username.clone(), password.clone()));
        }

        Ok(Self {
            transport: builder.build(),
            from,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: OutgoingEmail) -> Result<String, MailError> {
        let to = email
            .to
            .parse::<Mailbox>()
            .map_err(|_| MailError::InvalidAddress(email.to.clone()))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject)
            .header(ContentType::TEXT_PLAIN)
            .body(email.text)
            .map_err(|e| MailError::Rejected(e.to_string()))?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| MailError::Rejected(e.to_string()))?;

        if !response.is_positive() {
            return Err(MailError::Rejected("Email not accepted by provider.".to_string()));
        }

        Ok(response.code().to_string())
    }
}

/// Build the mailer for this configuration
pub fn build_mailer(config: &MailConfig) -> anyhow::Result<Arc<dyn Mailer>> {
    if config.is_configured() {
        Ok(Arc::new(SmtpMailer::new(config)?))
    } else {
        tracing::warn!("SMTP_HOST or MAIL_FROM not set; booking emails are disabled");
        Ok(Arc::new(DisabledMailer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_disabled_mailer_refuses() {
        let result = DisabledMailer
            .send(OutgoingEmail {
                to: "guest@example.com".to_string(),
                subject: "s".to_string(),
                text: "t".to_string(),
            })
            .await;
        assert!(matches!(result, Err(MailError::NotConfigured)));
    }

    #[test]
    fn test_build_mailer_without_config_is_disabled() {
        let config = MailConfig {
            smtp_host: None,
            smtp_port: 587,
            smtp_username: None,
            smtp_password: None,
            from: Some("bookings@example.com".to_string()),
        };
        assert!(build_mailer(&config).is_ok());
    }

    #[test]
    fn test_smtp_mailer_rejects_bad_sender() {
        let config = MailConfig {
            smtp_host: Some("smtp.example.com".to_string()),
            smtp_port: 587,
            smtp_username: None,
            smtp_password: None,
            from: Some("not an address".to_string()),
        };
        assert!(SmtpMailer::new(&config).is_err());
    }
}
