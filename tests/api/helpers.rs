use std::sync::LazyLock;

use reqwest::Response;
use secrecy::Secret;
use support_ack::configuration::{ApiSettings, EmailBackend, get_configuration};
use support_ack::startup::Application;
use support_ack::telemetry;
use support_ack::telemetry::init_subscriber;
use wiremock::MockServer;

pub struct TestApp {
    pub address: String,
    pub email_server: MockServer,
    pub api_client: reqwest::Client,
}

impl TestApp {
    pub async fn post_support(&self, body: serde_json::Value) -> Response {
        self.api_client
            .post(format!("{}/support", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute Request")
    }

    pub async fn post_support_raw(&self, body: &'static str) -> Response {
        self.api_client
            .post(format!("{}/support", &self.address))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .expect("Failed to execute Request")
    }

    pub async fn preflight_support(&self, body: &'static str) -> Response {
        self.api_client
            .request(reqwest::Method::OPTIONS, format!("{}/support", &self.address))
            .header("Origin", "http://localhost:3000")
            .header("Access-Control-Request-Method", "POST")
            .body(body)
            .send()
            .await
            .expect("Failed to execute Request")
    }

    pub async fn get_health_check(&self) -> Response {
        self.api_client
            .get(format!("{}/health_check", &self.address))
            .send()
            .await
            .expect("Failed to execute Request")
    }
}

static TRACING: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber =
            telemetry::get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

pub async fn spawn_app() -> TestApp {
    LazyLock::force(&TRACING);

    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");

        c.application.port = 0;
        c.email_client.backend = EmailBackend::Api;
        c.email_client.api = Some(ApiSettings {
            base_url: email_server.uri(),
            authorization_token: Secret::new("test-token".to_string()),
        });
        c
    };

    let application = Application::build(configuration)
        .await
        .expect("Failed to build application");
    let address = format!("http://127.0.0.1:{}", application.port());

    _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        email_server,
        api_client: reqwest::Client::new(),
    }
}

pub fn assert_cors_headers(response: &Response) {
    let headers = response.headers();
    assert_eq!(headers["Access-Control-Allow-Origin"], "*");
    assert_eq!(headers["Access-Control-Allow-Methods"], "POST");
    assert_eq!(headers["Access-Control-Allow-Headers"], "Content-Type");
}
