use crate::SupportRequest;
use crate::domain::{AcknowledgmentEmail, RecipientEmail, TicketSubject};

#[derive(Debug)]
pub struct AcknowledgmentRequest {
    pub recipient: RecipientEmail,
    pub subject: TicketSubject,
}

impl AcknowledgmentRequest {
    pub fn compose_email(&self) -> Result<AcknowledgmentEmail, tera::Error> {
        AcknowledgmentEmail::for_subject(&self.subject)
    }
}

impl TryFrom<SupportRequest> for AcknowledgmentRequest {
    type Error = String;

    fn try_from(value: SupportRequest) -> Result<Self, Self::Error> {
        let (Some(email), Some(subject)) = (value.email, value.subject) else {
            return Err("The email or subject field is missing".to_string());
        };
        Ok(Self {
            recipient: RecipientEmail::parse(email)?,
            subject: TicketSubject::parse(subject)?,
        })
    }
}
