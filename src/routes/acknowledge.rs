use actix_web::http::header::{self, ContentType};
use actix_web::http::{Method, StatusCode};
use actix_web::middleware::DefaultHeaders;
use actix_web::{HttpResponse, ResponseError, web};
use anyhow::Context;

use crate::SupportRequest;
use crate::domain::AcknowledgmentRequest;
use crate::email_client::MailTransport;

use super::error_chain_fmt;

/// Mounts `/support`: POST sends the acknowledgment, OPTIONS answers the
/// browser pre-flight. Every response carries the CORS headers.
pub fn support_service(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/support")
            .app_data(json_config())
            .wrap(cors_headers())
            .route(web::post().to(acknowledge))
            .route(web::method(Method::OPTIONS).to(preflight)),
    );
}

fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
        .add((header::ACCESS_CONTROL_ALLOW_METHODS, "POST"))
        .add((header::ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"))
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .content_type_required(false)
        .content_type(|_| true)
        .error_handler(|err, _req| AcknowledgeError::ValidationError(err.to_string()).into())
}

#[tracing::instrument(
    name = "Acknowledge a support request",
    skip(body, email_client),
    fields(
        recipient_email = tracing::field::Empty,
        ticket_subject = tracing::field::Empty
    )
)]
pub async fn acknowledge(
    web::Json(body): web::Json<SupportRequest>,
    email_client: web::Data<dyn MailTransport>,
) -> Result<HttpResponse, AcknowledgeError> {
    let request =
        AcknowledgmentRequest::try_from(body).map_err(AcknowledgeError::ValidationError)?;
    tracing::Span::current()
        .record("recipient_email", tracing::field::display(&request.recipient))
        .record("ticket_subject", tracing::field::display(&request.subject));

    let email = request
        .compose_email()
        .context("Failed to render the acknowledgment email")
        .map_err(AcknowledgeError::DeliveryError)?;
    email_client
        .send_email(
            &request.recipient,
            &email.subject,
            &email.html_body,
            &email.text_body,
        )
        .await
        .map_err(AcknowledgeError::DeliveryError)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("Email sent!"))
}

pub async fn preflight() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

#[derive(thiserror::Error)]
pub enum AcknowledgeError {
    #[error("Missing email or subject")]
    ValidationError(String),
    #[error("Failed to send email")]
    DeliveryError(#[source] anyhow::Error),
}

impl std::fmt::Debug for AcknowledgeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)?;
        if let Self::ValidationError(reason) = self {
            writeln!(f, "Reason:\n\t{reason}")?;
        }
        Ok(())
    }
}

impl ResponseError for AcknowledgeError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::DeliveryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(self.to_string())
    }
}
