#[derive(Debug, Clone)]
pub struct TicketSubject(String);

impl AsRef<str> for TicketSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TicketSubject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TicketSubject {
    pub fn parse(subject: impl ToString) -> Result<Self, String> {
        let subject = subject.to_string();
        if subject.trim().is_empty() {
            return Err("The ticket subject is empty".to_string());
        }
        Ok(Self(subject))
    }
}
