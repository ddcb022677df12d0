use crate::helpers::{assert_cors_headers, spawn_app};
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{any, method, path},
};

#[actix_web::test]
async fn support_valid_request_ret200() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_support(serde_json::json!({"email": "a@x.com", "subject": "Refund"}))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_cors_headers(&response);
    assert_eq!(response.text().await.unwrap(), "Email sent!");
}

#[actix_web::test]
async fn support_email_contains_the_ticket_subject() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.email_server)
        .await;

    app.post_support(serde_json::json!({"email": "a@x.com", "subject": "Refund"}))
        .await;

    let email_request = &app.email_server.received_requests().await.unwrap()[0];
    let body: serde_json::Value = serde_json::from_slice(&email_request.body).unwrap();

    assert_eq!(body["To"], "a@x.com");
    assert_eq!(body["From"], "Support Team <support@example.com>");
    assert!(body["TextBody"].as_str().unwrap().contains("Refund"));
    assert!(body["HtmlBody"].as_str().unwrap().contains("Refund"));
}

#[actix_web::test]
async fn support_invalid_request_ret400() {
    let test_cases = [
        (r#"{"subject": "Refund"}"#, "missing email field"),
        (r#"{"email": "a@x.com"}"#, "missing subject field"),
        ("{}", "missing all fields"),
        (r#"{"email": "", "subject": "Refund"}"#, "empty email"),
        (r#"{"email": "a@x.com", "subject": ""}"#, "empty subject"),
        (r#"{"email": "", "subject": ""}"#, "both fields empty"),
        ("not json at all", "malformed body"),
    ];

    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for (body, case) in test_cases {
        let response = app.post_support_raw(body).await;
        assert_eq!(
            response.status().as_u16(),
            400,
            "The api did not fail with code 400 when payload was {}",
            case
        );
        assert_cors_headers(&response);
        assert_eq!(response.text().await.unwrap(), "Missing email or subject");
    }
}

#[actix_web::test]
async fn preflight_ret204_without_sending() {
    let app = spawn_app().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for body in ["", r#"{"email": "a@x.com", "subject": "Refund"}"#, "garbage"] {
        let response = app.preflight_support(body).await;

        assert_eq!(response.status().as_u16(), 204);
        assert_cors_headers(&response);
        assert!(response.text().await.unwrap().is_empty());
    }
}

#[actix_web::test]
async fn support_fails_if_the_email_service_fails() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_support(serde_json::json!({"email": "a@x.com", "subject": "Refund"}))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    assert_cors_headers(&response);
    assert_eq!(response.text().await.unwrap(), "Failed to send email");
}

#[actix_web::test]
async fn identical_requests_send_two_emails() {
    let app = spawn_app().await;

    Mock::given(path("/email"))
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&app.email_server)
        .await;

    let body = serde_json::json!({"email": "a@x.com", "subject": "Refund"});
    for _ in 0..2 {
        let response = app.post_support(body.clone()).await;
        assert_eq!(response.status().as_u16(), 200);
    }
}
