#[derive(Debug, Clone)]
pub struct RecipientEmail(String);

impl AsRef<str> for RecipientEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecipientEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl RecipientEmail {
    /// Only presence is checked here. Whether the mail service accepts the
    /// address is decided by the transport at send time.
    pub fn parse(email: impl ToString) -> Result<Self, String> {
        let email = email.to_string();
        if email.trim().is_empty() {
            return Err("The recipient email is empty".to_string());
        }
        Ok(Self(email))
    }
}
