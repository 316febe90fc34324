//! Page State Machines
//!
//! Pure transitions for the create and pay pages. The components only
//! hold these in signals and render them.

use crate::api::{ApiError, PaymentInfo};
use crate::money::{parse_amount, AmountError};

/// Message shown when the pay page cannot reach the backend
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load payment information";

// ============================================================================
// Create page
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreateState {
    Editing,
    Submitting,
    /// Holds exactly what was sent to the server
    LinkReady {
        link: String,
        amount: i64,
        description: String,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// A request is already in flight
    Busy,
    InvalidAmount(AmountError),
}

impl CreateState {
    /// Validate the amount field and enter `Submitting`
    ///
    /// Returns the amount in cents to send.
    pub fn submit(&self, amount_input: &str) -> Result<(Self, i64), SubmitError> {
        if matches!(self, CreateState::Submitting) {
            return Err(SubmitError::Busy);
        }

        let cents = parse_amount(amount_input).map_err(SubmitError::InvalidAmount)?;
        Ok((CreateState::Submitting, cents))
    }

    pub fn succeed(self, link: String, amount: i64, description: String) -> Self {
        match self {
            CreateState::Submitting => CreateState::LinkReady {
                link,
                amount,
                description,
            },
            other => other,
        }
    }

    pub fn fail(self) -> Self {
        match self {
            CreateState::Submitting => CreateState::Editing,
            other => other,
        }
    }

    /// Discard the link; callers clear the form fields alongside
    pub fn reset(self) -> Self {
        CreateState::Editing
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, CreateState::Submitting)
    }

    pub fn link(&self) -> Option<&str> {
        match self {
            CreateState::LinkReady { link, .. } => Some(link),
            _ => None,
        }
    }
}

// ============================================================================
// Pay page
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PayState {
    Loading,
    Error(String),
    NotFound,
    AlreadySucceeded(PaymentInfo),
    AwaitingPayment(PaymentInfo),
}

impl PayState {
    /// Resolve the loaded state from an intent lookup
    pub fn from_lookup(result: Result<PaymentInfo, ApiError>) -> Self {
        match result {
            Ok(info) if info.status == "succeeded" => PayState::AlreadySucceeded(info),
            Ok(info) => PayState::AwaitingPayment(info),
            Err(ApiError::NotFound) => PayState::NotFound,
            Err(ApiError::Rejected(message) | ApiError::Invalid(message)) => PayState::Error(message),
            Err(ApiError::Transport(_)) => PayState::Error(LOAD_FAILED_MESSAGE.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(status: &str) -> PaymentInfo {
        PaymentInfo {
            amount: 1000,
            description: Some("Coffee".into()),
            client_secret: "pi_123_secret_abc".into(),
            status: status.into(),
        }
    }

    #[test]
    fn test_create_happy_path() {
        let (state, cents) = CreateState::Editing.submit("10.00").unwrap();
        assert_eq!(state, CreateState::Submitting);
        assert_eq!(cents, 1000);

        let state = state.succeed("https://host/payment/pi_123".into(), cents, "Coffee".into());
        assert_eq!(state.link(), Some("https://host/payment/pi_123"));
        assert_eq!(
            state,
            CreateState::LinkReady {
                link: "https://host/payment/pi_123".into(),
                amount: 1000,
                description: "Coffee".into(),
            }
        );
    }

    #[test]
    fn test_create_rejects_non_positive_amount() {
        assert_eq!(
            CreateState::Editing.submit("0"),
            Err(SubmitError::InvalidAmount(AmountError))
        );
        assert_eq!(
            CreateState::Editing.submit(""),
            Err(SubmitError::InvalidAmount(AmountError))
        );
    }

    #[test]
    fn test_create_rejects_amount_too_large() {
        assert_eq!(
            CreateState::Editing.submit("79228162514264337593543950335"),
            Err(SubmitError::InvalidAmount(AmountError))
        );
    }

    #[test]
    fn test_create_busy_while_submitting() {
        assert_eq!(CreateState::Submitting.submit("10"), Err(SubmitError::Busy));
    }

    #[test]
    fn test_create_failure_returns_to_editing() {
        let (state, _) = CreateState::Editing.submit("0.25").unwrap();
        assert_eq!(state.fail(), CreateState::Editing);
    }

    #[test]
    fn test_create_can_regenerate_from_link_ready() {
        let ready = CreateState::LinkReady {
            link: "https://host/payment/pi_1".into(),
            amount: 500,
            description: "Lunch".into(),
        };
        let (state, cents) = ready.submit("7.5").unwrap();
        assert!(state.is_submitting());
        assert_eq!(cents, 750);
    }

    #[test]
    fn test_create_reset() {
        let ready = CreateState::LinkReady {
            link: "https://host/payment/pi_1".into(),
            amount: 500,
            description: "Lunch".into(),
        };
        let state = ready.reset();
        assert_eq!(state, CreateState::Editing);
        assert_eq!(state.link(), None);
    }

    #[test]
    fn test_stray_transitions_are_ignored() {
        assert_eq!(
            CreateState::Editing.succeed("x".into(), 1, "d".into()),
            CreateState::Editing
        );
        assert_eq!(CreateState::Editing.fail(), CreateState::Editing);
    }

    #[test]
    fn test_pay_awaiting_payment() {
        let state = PayState::from_lookup(Ok(info("requires_confirmation")));
        assert_eq!(state, PayState::AwaitingPayment(info("requires_confirmation")));

        let state = PayState::from_lookup(Ok(info("requires_payment_method")));
        assert!(matches!(state, PayState::AwaitingPayment(_)));
    }

    #[test]
    fn test_pay_already_succeeded() {
        let state = PayState::from_lookup(Ok(info("succeeded")));
        assert_eq!(state, PayState::AlreadySucceeded(info("succeeded")));
    }

    #[test]
    fn test_pay_not_found() {
        assert_eq!(PayState::from_lookup(Err(ApiError::NotFound)), PayState::NotFound);
    }

    #[test]
    fn test_pay_errors() {
        assert_eq!(
            PayState::from_lookup(Err(ApiError::Transport("offline".into()))),
            PayState::Error(LOAD_FAILED_MESSAGE.into())
        );
        assert_eq!(
            PayState::from_lookup(Err(ApiError::Rejected("Payments not configured".into()))),
            PayState::Error("Payments not configured".into())
        );
    }
}
