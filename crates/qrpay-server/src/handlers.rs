//! HTTP Handlers

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use qrpay_payments::{IntentStatus, PaymentError, PaymentIntentClient};

use crate::state::AppState;

// ============================================================================
// Request / Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreatePaymentIntentRequest {
    /// Amount in cents
    #[serde(default)]
    pub amount: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentIntentResponse {
    pub success: bool,
    pub payment_intent_id: String,
    pub client_secret: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentBody {
    pub amount: i64,
    pub description: Option<String>,
    pub client_secret: String,
    pub status: IntentStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentIntentResponse {
    pub success: bool,
    pub payment_intent: PaymentIntentBody,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub payments_configured: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfigResponse {
    pub publishable_key: Option<String>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_body(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: message.into(),
        }),
    )
}

fn payment_error(err: &PaymentError) -> ApiError {
    let status = match err {
        PaymentError::InvalidAmount { .. } | PaymentError::InvalidRequest(_) => {
            StatusCode::BAD_REQUEST
        }
        PaymentError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        PaymentError::NotFound(_) => StatusCode::NOT_FOUND,
    };
    error_body(status, err.user_message())
}

fn payments(state: &AppState) -> Result<&Arc<PaymentIntentClient>, ApiError> {
    state.payments.as_ref().ok_or_else(|| {
        error_body(StatusCode::SERVICE_UNAVAILABLE, "Payments not configured")
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        payments_configured: state.payments.is_some(),
    })
}

/// Publishable settings the frontend needs at runtime
pub async fn public_config(State(state): State<AppState>) -> Json<PublicConfigResponse> {
    Json(PublicConfigResponse {
        publishable_key: state.publishable_key.clone(),
    })
}

/// Create a payment intent
pub async fn create_payment_intent(
    State(state): State<AppState>,
    payload: Result<Json<CreatePaymentIntentRequest>, JsonRejection>,
) -> Result<Json<CreatePaymentIntentResponse>, ApiError> {
    let client = payments(&state)?;

    let Json(payload) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection, "Rejected create-payment-intent body");
        payment_error(&PaymentError::InvalidRequest(rejection.body_text()))
    })?;

    let created = client
        .create_intent(payload.amount, payload.description)
        .await
        .map_err(|e| payment_error(&e))?;

    Ok(Json(CreatePaymentIntentResponse {
        success: true,
        payment_intent_id: created.id,
        client_secret: created.client_secret,
    }))
}

/// Retrieve a payment intent
pub async fn get_payment_intent(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PaymentIntentResponse>, ApiError> {
    let client = payments(&state)?;

    let view = client
        .retrieve_intent(&id)
        .await
        .map_err(|e| payment_error(&e))?;

    Ok(Json(PaymentIntentResponse {
        success: true,
        payment_intent: PaymentIntentBody {
            amount: view.amount,
            description: view.description,
            client_secret: view.client_secret,
            status: view.status,
        },
    }))
}
