//! Application State

use std::sync::Arc;

use qrpay_payments::PaymentIntentClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment intent client (None if the processor is not configured)
    pub payments: Option<Arc<PaymentIntentClient>>,

    /// Publishable key for the browser payment library
    pub publishable_key: Option<String>,
}

impl AppState {
    pub fn new(payments: Option<Arc<PaymentIntentClient>>, publishable_key: Option<String>) -> Self {
        Self {
            payments,
            publishable_key,
        }
    }
}
