mod acknowledgment_email;
mod acknowledgment_request;
mod recipient_email;
mod ticket_subject;

pub use acknowledgment_email::AcknowledgmentEmail;
pub use acknowledgment_request::AcknowledgmentRequest;
pub use recipient_email::RecipientEmail;
pub use ticket_subject::TicketSubject;
