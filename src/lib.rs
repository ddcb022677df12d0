pub mod configuration;
pub mod domain;
pub mod email_client;
pub mod routes;
pub mod startup;
pub mod telemetry;

/// Body of a support acknowledgment request as sent by the browser client.
///
/// Absent keys and `null` values both deserialize to `None`.
#[derive(serde::Deserialize, Debug)]
pub struct SupportRequest {
    pub email: Option<String>,
    pub subject: Option<String>,
}
