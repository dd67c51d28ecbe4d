//! Payment Request
//!
//! The complete serialized contribution form submitted to create a payment.
//! All fields are plain scalars; amounts travel as strings.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Serialized form data for `POST /payments/`
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Resolved contribution amount; absent until the form has one
    pub amount: Option<Decimal>,

    /// Interval wire value as submitted ("one_time", "month", "year");
    /// validated before any network call
    pub interval: Option<String>,

    /// ISO 4217 currency code
    #[serde(default)]
    pub currency: String,

    pub email: String,
    pub first_name: String,
    pub last_name: String,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub mailing_street: Option<String>,
    /// Second address line (apartment, suite...)
    #[serde(default)]
    pub mailing_complement: Option<String>,
    #[serde(default)]
    pub mailing_city: Option<String>,
    #[serde(default)]
    pub mailing_state: Option<String>,
    #[serde(default)]
    pub mailing_postal_code: Option<String>,
    /// Required; validated before any network call
    #[serde(default)]
    pub mailing_country: Option<String>,

    /// Whether the contributor agreed to cover processing fees
    #[serde(default)]
    pub agreed_to_pay_fees: bool,

    pub page_slug: String,
    pub revenue_program_slug: String,

    /// Anti-abuse token issued to the form
    #[serde(default)]
    pub captcha_token: Option<String>,
}

impl PaymentRequest {
    /// Contributor's display name for billing details
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_amount_serializes_as_string() {
        let request = PaymentRequest {
            amount: Some(dec!(120.50)),
            ..PaymentRequest::default()
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["amount"], serde_json::json!("120.50"));
    }

    #[test]
    fn test_full_name_trims_missing_parts() {
        let request = PaymentRequest {
            first_name: "Lois".into(),
            last_name: String::new(),
            ..PaymentRequest::default()
        };
        assert_eq!(request.full_name(), "Lois");
    }
}
