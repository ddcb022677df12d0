mod api;
mod smtp;

use crate::domain::RecipientEmail;
use async_trait::async_trait;
pub use api::ApiEmailClient;
pub use smtp::SmtpEmailClient;

/// Outbound email delivery.
///
/// Built once at startup from configuration and shared by every request.
/// Implementations make a single attempt per call and never retry.
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send_email(
        &self,
        recipient: &RecipientEmail,
        subject: &str,
        html_content: &str,
        text_content: &str,
    ) -> Result<(), anyhow::Error>;
}
