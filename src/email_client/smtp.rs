use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use lettre::message::{Mailbox, Message, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use secrecy::ExposeSecret;

use super::MailTransport;
use crate::configuration::SmtpSettings;
use crate::domain::RecipientEmail;

/// Sends through an SMTP relay with lettre's tokio transport.
pub struct SmtpEmailClient {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpEmailClient {
    /// No connection is opened until the first send.
    pub fn new(
        settings: &SmtpSettings,
        sender: &str,
        timeout: Duration,
    ) -> Result<Self, anyhow::Error> {
        let sender: Mailbox = sender
            .parse()
            .with_context(|| format!("`{sender}` is not a valid sender mailbox"))?;

        let builder = if settings.require_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
                .with_context(|| format!("Failed to set up TLS for {}", settings.host))?
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host)
        };
        let mut builder = builder.port(settings.port).timeout(Some(timeout));

        if let (Some(username), Some(password)) = (&settings.username, &settings.password) {
            builder = builder.credentials(Credentials::new(
                username.clone(),
                password.expose_secret().clone(),
            ));
        } else {
            tracing::warn!(
                smtp_host = %settings.host,
                "No SMTP credentials configured, sending without authentication"
            );
        }

        Ok(Self {
            transport: builder.build(),
            sender,
        })
    }

    fn build_message(
        &self,
        recipient: &RecipientEmail,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<Message, anyhow::Error> {
        let to: Mailbox = recipient
            .as_ref()
            .parse()
            .with_context(|| format!("`{recipient}` is not a valid recipient address"))?;

        Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(subject)
            .multipart(MultiPart::alternative_plain_html(
                text_content.to_string(),
                html_content.to_string(),
            ))
            .context("Failed to build the email message")
    }
}

#[async_trait]
impl MailTransport for SmtpEmailClient {
    #[tracing::instrument(name = "Send email over SMTP", skip_all)]
    async fn send_email(
        &self,
        recipient: &RecipientEmail,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<(), anyhow::Error> {
        let message = self.build_message(recipient, subject, html_content, text_content)?;
        self.transport
            .send(message)
            .await
            .context("The SMTP server did not accept the message")?;
        Ok(())
    }
}
