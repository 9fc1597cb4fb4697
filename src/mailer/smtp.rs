//! SMTP delivery backend built on lettre.

use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::metrics::EmailMetrics;

use super::{Mailer, MailerResult, OutboundEmail};

pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_mailbox: Mailbox,
}

impl SmtpMailer {
    /// Build a STARTTLS transport from configuration. Fails if the host
    /// cannot be resolved into transport parameters or the from address is
    /// not a valid mailbox.
    pub fn new(config: &SmtpConfig) -> MailerResult<Self> {
        let mut builder =
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?.port(config.port);

        if !config.username.is_empty() {
            builder = builder.credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ));
        }

        let address: Address = config.from_address.parse()?;
        let from_mailbox = Mailbox::new(Some(config.from_name.clone()), address);

        Ok(Self {
            transport: builder.build(),
            from_mailbox,
        })
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, email: &OutboundEmail) -> MailerResult<()> {
        let message = Message::builder()
            .from(self.from_mailbox.clone())
            .to(email.to.parse()?)
            .subject(email.subject.as_str())
            .multipart(MultiPart::alternative_plain_html(
                email.text_body.clone(),
                email.html_body.clone(),
            ))?;

        match self.transport.send(message).await {
            Ok(response) => {
                EmailMetrics::record_sent();
                tracing::info!(
                    to = %email.to,
                    code = %response.code(),
                    "Email accepted by SMTP relay"
                );
                Ok(())
            }
            Err(e) => {
                EmailMetrics::record_failed();
                tracing::error!(to = %email.to, error = %e, "SMTP send failed");
                Err(e.into())
            }
        }
    }

    fn backend(&self) -> &'static str {
        "smtp"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_from_address_rejected() {
        let config = SmtpConfig {
            enabled: true,
            from_address: "not an address".to_string(),
            ..SmtpConfig::default()
        };

        assert!(SmtpMailer::new(&config).is_err());
    }

    // Built transports hold a connection pool whose destructor needs a
    // live tokio runtime, so construction tests run under one
    #[tokio::test]
    async fn test_builds_without_credentials() {
        let config = SmtpConfig {
            enabled: true,
            host: "smtp.example.com".to_string(),
            from_address: "noreply@example.com".to_string(),
            ..SmtpConfig::default()
        };

        assert!(SmtpMailer::new(&config).is_ok());
    }
}
