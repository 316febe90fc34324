//! Payment Intents
//!
//! The processor seam and the client the HTTP layer talks to.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::{PaymentError, Result};

/// Smallest charge the processor accepts for USD, in cents
pub const DEFAULT_MINIMUM_AMOUNT: i64 = 50;

/// Processor-side intent status, spelled the way the processor spells it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentStatus {
    RequiresPaymentMethod,
    RequiresConfirmation,
    RequiresAction,
    Processing,
    RequiresCapture,
    Canceled,
    Succeeded,
}

impl IntentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IntentStatus::RequiresPaymentMethod => "requires_payment_method",
            IntentStatus::RequiresConfirmation => "requires_confirmation",
            IntentStatus::RequiresAction => "requires_action",
            IntentStatus::Processing => "processing",
            IntentStatus::RequiresCapture => "requires_capture",
            IntentStatus::Canceled => "canceled",
            IntentStatus::Succeeded => "succeeded",
        }
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, IntentStatus::Succeeded)
    }
}

impl std::fmt::Display for IntentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parameters forwarded to the processor when creating an intent
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateIntentRequest {
    /// Amount in minor units (cents)
    pub amount: i64,

    /// Free-form description shown to the payer
    #[serde(default)]
    pub description: Option<String>,
}

/// Identifier and confirmation secret of a freshly created intent
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedIntent {
    pub id: String,
    pub client_secret: String,
}

/// Transient read view of a processor-owned intent
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentView {
    pub amount: i64,
    pub description: Option<String>,
    pub client_secret: String,
    pub status: IntentStatus,
}

/// Payment processor trait
///
/// Implemented by [`crate::StripeProcessor`] and, for tests, [`crate::MockProcessor`].
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Create a new intent
    async fn create_intent(&self, request: &CreateIntentRequest) -> Result<CreatedIntent>;

    /// Look up an intent by its processor-assigned identifier
    async fn retrieve_intent(&self, id: &str) -> Result<IntentView>;

    /// Processor name
    fn name(&self) -> &str;
}

/// Pass-through client for payment intents
///
/// Every call is a single round trip: no retries, caching or idempotency keys.
pub struct PaymentIntentClient {
    processor: Arc<dyn PaymentProcessor>,
    minimum_amount: i64,
}

impl PaymentIntentClient {
    pub fn new(processor: Arc<dyn PaymentProcessor>) -> Self {
        Self::with_minimum(processor, DEFAULT_MINIMUM_AMOUNT)
    }

    pub fn with_minimum(processor: Arc<dyn PaymentProcessor>, minimum_amount: i64) -> Self {
        Self {
            processor,
            minimum_amount,
        }
    }

    pub fn minimum_amount(&self) -> i64 {
        self.minimum_amount
    }

    pub fn processor_name(&self) -> &str {
        self.processor.name()
    }

    /// Create an intent for `amount` cents
    ///
    /// Amounts below the minimum are rejected before the processor is called.
    pub async fn create_intent(
        &self,
        amount: Option<i64>,
        description: Option<String>,
    ) -> Result<CreatedIntent> {
        let amount = match amount {
            Some(amount) if amount >= self.minimum_amount => amount,
            _ => {
                tracing::warn!(
                    amount = ?amount,
                    minimum = self.minimum_amount,
                    "Rejected payment intent amount"
                );
                return Err(PaymentError::InvalidAmount {
                    minimum: self.minimum_amount,
                });
            }
        };

        let request = CreateIntentRequest {
            amount,
            description,
        };

        let created = self.processor.create_intent(&request).await.map_err(|e| {
            tracing::error!(error = %e, processor = self.processor.name(), "Error creating payment intent");
            match e {
                PaymentError::Upstream(_) => e,
                other => PaymentError::Upstream(other.to_string()),
            }
        })?;

        tracing::info!(intent_id = %created.id, amount, "Created payment intent");
        Ok(created)
    }

    /// Retrieve an intent
    ///
    /// Every processor failure, transient or not, is reported as `NotFound`.
    pub async fn retrieve_intent(&self, id: &str) -> Result<IntentView> {
        let view = self.processor.retrieve_intent(id).await.map_err(|e| {
            tracing::error!(error = %e, intent_id = %id, "Error retrieving payment intent");
            match e {
                PaymentError::NotFound(_) => e,
                other => PaymentError::NotFound(other.to_string()),
            }
        })?;

        tracing::debug!(intent_id = %id, status = %view.status, "Retrieved payment intent");
        Ok(view)
    }
}

/// Format minor units as dollars, e.g. `50` -> `$0.50`
pub fn format_minor_units(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{}${}.{:02}", sign, cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockProcessor;

    fn client_with(mock: &Arc<MockProcessor>) -> PaymentIntentClient {
        PaymentIntentClient::new(mock.clone())
    }

    #[test]
    fn test_format_minor_units() {
        assert_eq!(format_minor_units(50), "$0.50");
        assert_eq!(format_minor_units(1000), "$10.00");
        assert_eq!(format_minor_units(123_456), "$1234.56");
        assert_eq!(format_minor_units(-5), "-$0.05");
    }

    #[test]
    fn test_status_serialization() {
        let json = serde_json::to_string(&IntentStatus::RequiresConfirmation).unwrap();
        assert_eq!(json, "\"requires_confirmation\"");
        assert!(IntentStatus::Succeeded.is_succeeded());
        assert!(!IntentStatus::Processing.is_succeeded());
    }

    #[tokio::test]
    async fn test_below_minimum_never_reaches_processor() {
        let mock = Arc::new(MockProcessor::new());
        let client = client_with(&mock);

        for amount in [None, Some(-100), Some(0), Some(25), Some(49)] {
            let err = client.create_intent(amount, None).await.unwrap_err();
            assert!(matches!(err, PaymentError::InvalidAmount { minimum: 50 }));
        }

        assert_eq!(mock.create_calls(), 0);
    }

    #[tokio::test]
    async fn test_forwards_amount_and_description() {
        let mock = Arc::new(MockProcessor::new());
        let client = client_with(&mock);

        let created = client
            .create_intent(Some(1000), Some("Coffee".into()))
            .await
            .unwrap();

        assert_eq!(mock.create_calls(), 1);
        assert_eq!(
            mock.last_create().await,
            Some(CreateIntentRequest {
                amount: 1000,
                description: Some("Coffee".into()),
            })
        );

        let view = client.retrieve_intent(&created.id).await.unwrap();
        assert_eq!(view.amount, 1000);
        assert_eq!(view.client_secret, created.client_secret);
        assert_eq!(view.status, IntentStatus::RequiresConfirmation);
    }

    #[tokio::test]
    async fn test_minimum_is_inclusive() {
        let mock = Arc::new(MockProcessor::new());
        let client = client_with(&mock);

        assert!(client.create_intent(Some(50), None).await.is_ok());
    }

    #[tokio::test]
    async fn test_custom_minimum() {
        let mock = Arc::new(MockProcessor::new());
        let client = PaymentIntentClient::with_minimum(mock.clone(), 100);

        let err = client.create_intent(Some(99), None).await.unwrap_err();
        assert_eq!(err.user_message(), "Amount must be at least $1.00");
    }

    #[tokio::test]
    async fn test_processor_failure_is_upstream() {
        let mock = Arc::new(MockProcessor::new());
        mock.fail_creates(true);
        let client = client_with(&mock);

        let err = client.create_intent(Some(500), None).await.unwrap_err();
        assert!(matches!(err, PaymentError::Upstream(_)));
        assert_eq!(err.user_message(), "Failed to create payment intent");
    }

    #[tokio::test]
    async fn test_unknown_intent_is_not_found() {
        let mock = Arc::new(MockProcessor::new());
        let client = client_with(&mock);

        let err = client.retrieve_intent("pi_bad").await.unwrap_err();
        assert!(matches!(err, PaymentError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_retrieval_failures_collapse_to_not_found() {
        let mock = Arc::new(MockProcessor::new());
        mock.fail_retrievals(true);
        let client = client_with(&mock);

        let created = client.create_intent(Some(500), None).await.unwrap();
        let err = client.retrieve_intent(&created.id).await.unwrap_err();
        assert!(matches!(err, PaymentError::NotFound(_)));
    }
}
