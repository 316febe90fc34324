use std::path::Path;
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use qrpay_payments::{IntentStatus, IntentView, MockProcessor, PaymentIntentClient};
use qrpay_server::{build_router, AppState};
use serde_json::{json, Value};
use tower::util::ServiceExt;

fn app_with(mock: &Arc<MockProcessor>) -> Router {
    let client = Arc::new(PaymentIntentClient::new(mock.clone()));
    let state = AppState::new(Some(client), Some("pk_test_123".into()));
    build_router(state, Path::new("static"))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

fn create_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/create-payment-intent")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn create_below_minimum_is_rejected_without_processor_call() {
    let mock = Arc::new(MockProcessor::new());

    for amount in [json!(0), json!(1), json!(25), json!(49), json!(-500), Value::Null] {
        let (status, body) = send(
            app_with(&mock),
            create_request(&json!({ "amount": amount, "description": "Coffee" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Amount must be at least $0.50");
    }

    let (status, _) = send(app_with(&mock), create_request(&json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert_eq!(mock.create_calls(), 0);
}

#[tokio::test]
async fn create_forwards_amount_and_returns_identifiers() {
    let mock = Arc::new(MockProcessor::new());

    let (status, body) = send(
        app_with(&mock),
        create_request(&json!({ "amount": 1000, "description": "Coffee" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let id = body["paymentIntentId"].as_str().unwrap().to_string();
    let secret = body["clientSecret"].as_str().unwrap().to_string();
    assert!(id.starts_with("pi_"));

    let forwarded = mock.last_create().await.unwrap();
    assert_eq!(forwarded.amount, 1000);
    assert_eq!(forwarded.description.as_deref(), Some("Coffee"));

    let (status, body) = send(app_with(&mock), get_request(&format!("/api/payment-intent/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["paymentIntent"]["amount"], 1000);
    assert_eq!(body["paymentIntent"]["description"], "Coffee");
    assert_eq!(body["paymentIntent"]["clientSecret"], secret.as_str());
    assert_eq!(body["paymentIntent"]["status"], "requires_confirmation");
}

#[tokio::test]
async fn create_without_description_sends_none() {
    let mock = Arc::new(MockProcessor::new());

    let (status, _) = send(app_with(&mock), create_request(&json!({ "amount": 50 }))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(mock.last_create().await.unwrap().description, None);
}

#[tokio::test]
async fn create_upstream_failure_is_generic_500() {
    let mock = Arc::new(MockProcessor::new());
    mock.fail_creates(true);

    let (status, body) = send(app_with(&mock), create_request(&json!({ "amount": 1000 }))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Failed to create payment intent");
}

#[tokio::test]
async fn create_malformed_body_is_bad_request() {
    let mock = Arc::new(MockProcessor::new());

    let request = Request::builder()
        .method("POST")
        .uri("/api/create-payment-intent")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(app_with(&mock), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
    assert_eq!(mock.create_calls(), 0);
}

#[tokio::test]
async fn retrieve_unknown_id_is_404() {
    let mock = Arc::new(MockProcessor::new());

    let (status, body) = send(app_with(&mock), get_request("/api/payment-intent/pi_bad")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Payment not found");
}

#[tokio::test]
async fn retrieve_processor_outage_is_still_404() {
    let mock = Arc::new(MockProcessor::new());
    mock.seed(
        "pi_123",
        IntentView {
            amount: 1000,
            description: None,
            client_secret: "pi_123_secret_abc".into(),
            status: IntentStatus::RequiresConfirmation,
        },
    )
    .await;
    mock.fail_retrievals(true);

    let (status, body) = send(app_with(&mock), get_request("/api/payment-intent/pi_123")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Payment not found");
}

#[tokio::test]
async fn retrieve_succeeded_intent_reports_status() {
    let mock = Arc::new(MockProcessor::new());
    mock.seed(
        "pi_paid",
        IntentView {
            amount: 2500,
            description: None,
            client_secret: "pi_paid_secret_abc".into(),
            status: IntentStatus::Succeeded,
        },
    )
    .await;

    let (status, body) = send(app_with(&mock), get_request("/api/payment-intent/pi_paid")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["paymentIntent"]["status"], "succeeded");
    assert_eq!(body["paymentIntent"]["description"], Value::Null);
}

#[tokio::test]
async fn payments_disabled_returns_503() {
    let app = build_router(AppState::new(None, None), Path::new("static"));

    let (status, body) = send(app.clone(), create_request(&json!({ "amount": 1000 }))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "Payments not configured");

    let (status, _) = send(app, get_request("/api/payment-intent/pi_123")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn health_and_config_endpoints() {
    let mock = Arc::new(MockProcessor::new());

    let (status, body) = send(app_with(&mock), get_request("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["paymentsConfigured"], true);

    let (status, body) = send(app_with(&mock), get_request("/api/config")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["publishableKey"], "pk_test_123");
}
