//! Outbound mail delivery.
//!
//! The templating pipeline only produces strings; delivery goes through the
//! provider-agnostic [`Mailer`] trait. Two backends exist: an SMTP backend
//! (lettre) and a no-op backend used when SMTP is not configured, which
//! logs and drops the message so development environments never need a
//! relay.
//!
//! Every message is sent as multipart/alternative with a plain-text part
//! derived from the rendered HTML, for clients that refuse HTML.

mod smtp;
mod text;

pub use smtp::SmtpMailer;
pub use text::html_to_text;

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::SmtpConfig;
use crate::metrics::EmailMetrics;

/// Mailer-specific error type
#[derive(Debug, Error)]
pub enum MailerError {
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Result type for mailer operations
pub type MailerResult<T> = Result<T, MailerError>;

/// A fully rendered message ready for delivery
#[derive(Debug, Clone)]
pub struct OutboundEmail {
    /// Recipient address
    pub to: String,

    /// Subject line
    pub subject: String,

    /// Rendered HTML document
    pub html_body: String,

    /// Plain-text alternative
    pub text_body: String,
}

/// Provider-agnostic send operation
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutboundEmail) -> MailerResult<()>;

    /// Backend name for health reporting
    fn backend(&self) -> &'static str;
}

/// Backend that logs and drops messages; used when SMTP is not configured
pub struct NoopMailer;

#[async_trait]
impl Mailer for NoopMailer {
    async fn send(&self, email: &OutboundEmail) -> MailerResult<()> {
        EmailMetrics::record_skipped();
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            html_bytes = email.html_body.len(),
            "SMTP disabled, dropping outbound email"
        );
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "noop"
    }
}

/// Create a mailer backend from configuration
pub fn create_mailer(config: &SmtpConfig) -> MailerResult<Arc<dyn Mailer>> {
    if !config.enabled {
        tracing::warn!("SMTP is disabled; outbound email will be dropped");
        return Ok(Arc::new(NoopMailer));
    }

    let mailer = SmtpMailer::new(config)?;
    tracing::info!(host = %config.host, port = config.port, "SMTP mailer initialized");
    Ok(Arc::new(mailer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_noop_mailer_accepts_anything() {
        let mailer = NoopMailer;
        let email = OutboundEmail {
            to: "not-even-an-address".to_string(),
            subject: "x".to_string(),
            html_body: "<p>x</p>".to_string(),
            text_body: "x".to_string(),
        };

        assert!(mailer.send(&email).await.is_ok());
        assert_eq!(mailer.backend(), "noop");
    }

    #[test]
    fn test_factory_returns_noop_when_disabled() {
        let config = SmtpConfig::default();
        let mailer = create_mailer(&config).unwrap();
        assert_eq!(mailer.backend(), "noop");
    }

    // The SMTP transport's pool destructor needs a live tokio runtime
    #[tokio::test]
    async fn test_factory_returns_smtp_when_enabled() {
        let config = SmtpConfig {
            enabled: true,
            host: "smtp.example.com".to_string(),
            from_address: "noreply@example.com".to_string(),
            ..SmtpConfig::default()
        };
        let mailer = create_mailer(&config).unwrap();
        assert_eq!(mailer.backend(), "smtp");
    }
}
