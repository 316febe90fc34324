//! API Client

use reqwest::Url;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure talking to the backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Server answered `success: false` with a message
    #[error("{0}")]
    Rejected(String),

    /// Server refused the input (HTTP 400)
    #[error("{0}")]
    Invalid(String),

    /// Server answered 404
    #[error("Payment not found")]
    NotFound,

    /// Request or response body failed
    #[error("Request failed: {0}")]
    Transport(String),
}

/// Identifier of a freshly created intent
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreatedIntent {
    pub id: String,
}

/// Intent details shown on the pay page
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInfo {
    pub amount: i64,
    #[serde(default)]
    pub description: Option<String>,
    pub client_secret: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
struct CreateBody<'a> {
    amount: i64,
    description: &'a str,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    payment_intent_id: Option<String>,
    #[serde(default)]
    client_secret: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentIntentResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    payment_intent: Option<PaymentInfo>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicConfig {
    #[serde(default)]
    pub publishable_key: Option<String>,
}

/// Origin of the current page
pub fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

fn endpoint(path: &str) -> String {
    format!("{}{}", origin(), path)
}

/// Lookup URL for an intent; the id is always a single path segment
fn intent_url(origin: &str, id: &str) -> Result<Url, ApiError> {
    let mut url = Url::parse(origin).map_err(|e| ApiError::Transport(e.to_string()))?;
    url.path_segments_mut()
        .map_err(|()| ApiError::Transport(format!("cannot build a path on {origin}")))?
        .clear()
        .extend(["api", "payment-intent", id]);
    Ok(url)
}

/// Create a payment intent for `amount` cents
pub async fn create_payment_intent(amount: i64, description: &str) -> Result<CreatedIntent, ApiError> {
    let response = reqwest::Client::new()
        .post(endpoint("/api/create-payment-intent"))
        .json(&CreateBody { amount, description })
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let data: CreateResponse = response.json().await.unwrap_or_default();
    interpret_create(status, data)
}

/// Fetch intent details by identifier
pub async fn fetch_payment_intent(id: &str) -> Result<PaymentInfo, ApiError> {
    let response = reqwest::Client::new()
        .get(intent_url(&origin(), id)?)
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    if status == 404 {
        return Err(ApiError::NotFound);
    }

    let data: PaymentIntentResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    interpret_lookup(status, data)
}

/// Fetch the publishable processor key
pub async fn fetch_config() -> Result<PublicConfig, ApiError> {
    reqwest::Client::new()
        .get(endpoint("/api/config"))
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .json()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))
}

fn interpret_create(status: u16, data: CreateResponse) -> Result<CreatedIntent, ApiError> {
    match data {
        CreateResponse {
            success: true,
            payment_intent_id: Some(id),
            client_secret: Some(_),
            ..
        } => Ok(CreatedIntent { id }),
        CreateResponse { error: Some(message), .. } if status == 400 => Err(ApiError::Invalid(message)),
        CreateResponse { error: Some(message), .. } => Err(ApiError::Rejected(message)),
        _ => Err(ApiError::Transport(format!("unexpected response (HTTP {status})"))),
    }
}

fn interpret_lookup(status: u16, data: PaymentIntentResponse) -> Result<PaymentInfo, ApiError> {
    if status == 404 {
        return Err(ApiError::NotFound);
    }

    match data {
        PaymentIntentResponse {
            success: true,
            payment_intent: Some(info),
            ..
        } => Ok(info),
        PaymentIntentResponse { error: Some(message), .. } => Err(ApiError::Rejected(message)),
        _ => Err(ApiError::Transport(format!("unexpected response (HTTP {status})"))),
    }
}
