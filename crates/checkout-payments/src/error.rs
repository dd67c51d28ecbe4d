//! Payment Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PaymentError>;

/// Errors raised while creating or deleting a payment resource
#[derive(Error, Debug)]
pub enum PaymentError {
    /// Page is missing its slug
    #[error("page has no slug")]
    MissingPageSlug,

    /// Form was submitted without a mailing country
    #[error("mailing_country is required")]
    MissingCountry,

    /// Interval missing or not a recognized value
    #[error("missing or unrecognized contribution interval: {0:?}")]
    InvalidInterval(Option<String>),

    /// Page has no connected payment-processor account
    #[error("page has no payment account configured")]
    MissingPaymentAccount,

    /// No valid amount was resolved before submission
    #[error("no contribution amount resolved")]
    MissingAmount,

    /// Anti-abuse rejection; an expected outcome, not a defect
    #[error("payment request rejected")]
    Rejected,

    /// Unexpected API failure
    #[error("payment API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// create_payment while a creation is already in flight
    #[error("a payment creation is already in flight")]
    CreationInFlight,

    /// create_payment while a record already exists
    #[error("a payment already exists; delete it first")]
    PaymentActive,

    /// delete_payment with no record to delete
    #[error("no payment to delete")]
    NoPayment,
}

impl PaymentError {
    /// Precondition failures indicate a misconfigured page or an incomplete
    /// form. They are raised synchronously, before any network call.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            PaymentError::MissingPageSlug
                | PaymentError::MissingCountry
                | PaymentError::InvalidInterval(_)
                | PaymentError::MissingPaymentAccount
                | PaymentError::MissingAmount
        )
    }

    /// Expected anti-abuse rejections are kept out of error telemetry but
    /// still propagate as failures.
    pub fn is_expected_rejection(&self) -> bool {
        matches!(self, PaymentError::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precondition_classification() {
        assert!(PaymentError::MissingCountry.is_precondition());
        assert!(PaymentError::InvalidInterval(None).is_precondition());
        assert!(!PaymentError::Rejected.is_precondition());
        assert!(
            !PaymentError::Api {
                status: 500,
                body: String::new()
            }
            .is_precondition()
        );
    }

    #[test]
    fn test_rejection_classification() {
        assert!(PaymentError::Rejected.is_expected_rejection());
        assert!(!PaymentError::NoPayment.is_expected_rejection());
    }
}
