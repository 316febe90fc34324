//! Payment Error Types

use thiserror::Error;

use crate::intent::format_minor_units;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Payment-related errors
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Amount missing or below the processor minimum
    #[error("Amount below minimum of {minimum} minor units")]
    InvalidAmount { minimum: i64 },

    /// Request body could not be understood
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Processor call failed
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Processor could not resolve the identifier
    #[error("Payment intent not found: {0}")]
    NotFound(String),
}

impl PaymentError {
    /// Get user-friendly message
    ///
    /// Processor detail stays in the `Display` output, which is only logged.
    pub fn user_message(&self) -> String {
        match self {
            PaymentError::InvalidAmount { minimum } => {
                format!("Amount must be at least {}", format_minor_units(*minimum))
            }
            PaymentError::InvalidRequest(_) => "Invalid request body".into(),
            PaymentError::Upstream(_) => "Failed to create payment intent".into(),
            PaymentError::NotFound(_) => "Payment not found".into(),
        }
    }
}
