use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

use crate::email_client::{ApiEmailClient, MailTransport, SmtpEmailClient};

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub email_client: EmailClientSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmailBackend {
    Smtp,
    Api,
}

#[derive(Deserialize, Clone)]
pub struct EmailClientSettings {
    pub backend: EmailBackend,
    pub sender_email: String,
    pub sender_name: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_milliseconds: u64,
    pub smtp: Option<SmtpSettings>,
    pub api: Option<ApiSettings>,
}

#[derive(Deserialize, Clone)]
pub struct SmtpSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub require_tls: bool,
    pub username: Option<String>,
    pub password: Option<Secret<String>>,
}

#[derive(Deserialize, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub authorization_token: Secret<String>,
}

impl EmailClientSettings {
    /// Sender identity in `Name <address>` form.
    pub fn sender(&self) -> String {
        format!("{} <{}>", self.sender_name, self.sender_email)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_milliseconds)
    }

    /// Builds the transport selected by `backend`. Called once at startup.
    pub fn client(&self) -> Result<Arc<dyn MailTransport>, anyhow::Error> {
        match self.backend {
            EmailBackend::Smtp => {
                let smtp = self
                    .smtp
                    .as_ref()
                    .context("The smtp backend was selected but `email_client.smtp` is missing")?;
                let client = SmtpEmailClient::new(smtp, &self.sender(), self.timeout())?;
                Ok(Arc::new(client))
            }
            EmailBackend::Api => {
                let api = self
                    .api
                    .as_ref()
                    .context("The api backend was selected but `email_client.api` is missing")?;
                let client = ApiEmailClient::new(
                    api.base_url.clone(),
                    self.sender(),
                    api.authorization_token.clone(),
                    self.timeout(),
                )
                .context("Failed to build the HTTP email client")?;
                Ok(Arc::new(client))
            }
        }
    }
}

#[derive(Debug)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {e}"))
    })?;
    let configuration_directory = base_path.join("configuration");

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // APP_EMAIL_CLIENT__SMTP__PASSWORD=... sets `email_client.smtp.password`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
