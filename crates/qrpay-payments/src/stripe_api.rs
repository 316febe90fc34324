//! Stripe Payment Intents
//!
//! `PaymentProcessor` backed by the Stripe REST API.

use async_trait::async_trait;
use stripe::{
    Client, CreatePaymentIntent, CreatePaymentIntentAutomaticPaymentMethods, Currency,
    PaymentIntent, PaymentIntentId, PaymentIntentStatus,
};

use crate::error::{PaymentError, Result};
use crate::intent::{CreateIntentRequest, CreatedIntent, IntentStatus, IntentView, PaymentProcessor};

/// Stripe client wrapper
pub struct StripeProcessor {
    client: Client,
}

impl StripeProcessor {
    /// Create a new Stripe processor from a secret key
    pub fn new(secret_key: &str) -> Self {
        Self {
            client: Client::new(secret_key),
        }
    }

    /// Get the underlying Stripe client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

#[async_trait]
impl PaymentProcessor for StripeProcessor {
    async fn create_intent(&self, request: &CreateIntentRequest) -> Result<CreatedIntent> {
        let mut params = CreatePaymentIntent::new(request.amount, Currency::USD);
        params.description = request.description.as_deref();
        params.automatic_payment_methods = Some(CreatePaymentIntentAutomaticPaymentMethods {
            enabled: true,
            allow_redirects: None,
        });

        let intent = PaymentIntent::create(&self.client, params)
            .await
            .map_err(|e| PaymentError::Upstream(e.to_string()))?;

        let client_secret = intent
            .client_secret
            .ok_or_else(|| PaymentError::Upstream("No client secret returned".into()))?;

        Ok(CreatedIntent {
            id: intent.id.to_string(),
            client_secret,
        })
    }

    async fn retrieve_intent(&self, id: &str) -> Result<IntentView> {
        let intent_id: PaymentIntentId = id
            .parse()
            .map_err(|_| PaymentError::NotFound(id.to_string()))?;

        let intent = PaymentIntent::retrieve(&self.client, &intent_id, &[])
            .await
            .map_err(|e| PaymentError::NotFound(format!("{id}: {e}")))?;

        let client_secret = intent
            .client_secret
            .ok_or_else(|| PaymentError::NotFound(format!("{id}: no client secret")))?;

        Ok(IntentView {
            amount: intent.amount,
            description: intent.description,
            client_secret,
            status: map_status(intent.status),
        })
    }

    fn name(&self) -> &str {
        "Stripe"
    }
}

fn map_status(status: PaymentIntentStatus) -> IntentStatus {
    match status {
        PaymentIntentStatus::RequiresPaymentMethod => IntentStatus::RequiresPaymentMethod,
        PaymentIntentStatus::RequiresConfirmation => IntentStatus::RequiresConfirmation,
        PaymentIntentStatus::RequiresAction => IntentStatus::RequiresAction,
        PaymentIntentStatus::Processing => IntentStatus::Processing,
        PaymentIntentStatus::RequiresCapture => IntentStatus::RequiresCapture,
        PaymentIntentStatus::Canceled => IntentStatus::Canceled,
        PaymentIntentStatus::Succeeded => IntentStatus::Succeeded,
    }
}
