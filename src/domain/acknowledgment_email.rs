use tera::{Context, Tera};

use crate::domain::TicketSubject;

const ACKNOWLEDGMENT_SUBJECT: &str = "We received your support request";

/// The fixed acknowledgment template, rendered for one ticket subject.
///
/// The `.html` template is autoescaped by tera; the `.txt` one is not, so
/// the plain-text body carries the subject verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcknowledgmentEmail {
    pub subject: String,
    pub html_body: String,
    pub text_body: String,
}

impl AcknowledgmentEmail {
    pub fn for_subject(ticket_subject: &TicketSubject) -> Result<Self, tera::Error> {
        let mut engine = Tera::default();
        engine.add_raw_templates(vec![
            (
                "acknowledgment.html",
                include_str!("../../templates/acknowledgment.html"),
            ),
            (
                "acknowledgment.txt",
                include_str!("../../templates/acknowledgment.txt"),
            ),
        ])?;

        let mut context = Context::new();
        context.insert("ticket_subject", ticket_subject.as_ref());

        Ok(Self {
            subject: ACKNOWLEDGMENT_SUBJECT.to_string(),
            html_body: engine.render("acknowledgment.html", &context)?,
            text_body: engine.render("acknowledgment.txt", &context)?,
        })
    }
}
