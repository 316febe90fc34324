//! # qrpay-payments
//!
//! Payment intent client for qrpay.
//!
//! All payment logic (amount limits, status transitions, card handling) is
//! owned by the processor. This crate only validates the minimum amount,
//! forwards calls, and reshapes the results.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────────────┐     ┌──────────────────┐
//! │ HTTP handler │────▶│ PaymentIntentClient  │────▶│ PaymentProcessor │
//! │              │     │ (minimum check)      │     │ Stripe / Mock    │
//! └──────────────┘     └──────────────────────┘     └──────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use qrpay_payments::{PaymentIntentClient, StripeProcessor};
//!
//! let processor = Arc::new(StripeProcessor::new("sk_test_xxx"));
//! let client = PaymentIntentClient::new(processor);
//!
//! let created = client.create_intent(Some(1000), Some("Coffee".into())).await?;
//! let view = client.retrieve_intent(&created.id).await?;
//! ```

mod error;
mod intent;
mod mock;
mod stripe_api;

pub use error::{PaymentError, Result};
pub use intent::{
    format_minor_units, CreateIntentRequest, CreatedIntent, IntentStatus, IntentView,
    PaymentIntentClient, PaymentProcessor, DEFAULT_MINIMUM_AMOUNT,
};
pub use mock::MockProcessor;
pub use stripe_api::StripeProcessor;
