//! Payment Record
//!
//! The backend-issued resource representing an in-progress contribution,
//! including the processor client secret needed to finalize it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use checkout_core::{ContributionInterval, Currency};

/// Billing address forwarded to the processor.
///
/// Every key is present even when blank; the processor integration requires
/// all of them on the payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingAddress {
    pub city: String,
    pub country: String,
    pub line1: String,
    pub line2: String,
    pub postal_code: String,
    pub state: String,
}

/// Contributor details forwarded to the processor
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BillingDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: BillingAddress,
}

/// Processor-specific slice of a payment record
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StripeDetails {
    /// Connected account the charge is routed through
    pub account_id: String,

    pub billing_details: BillingDetails,

    /// Client secret handed to the processor SDK to finalize the charge
    pub client_secret: String,
}

/// The payment resource owned by one lifecycle manager instance.
///
/// Created only by a successful creation call; gone once deleted or the
/// manager is discarded.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub uuid: Uuid,
    pub amount: Decimal,
    pub currency: Currency,
    pub interval: ContributionInterval,
    pub page_slug: String,
    pub revenue_program_slug: String,
    /// Opaque hash of the contributor email, computed by the backend
    pub email_hash: String,
    /// Where the contributor lands after finalizing; empty if unconfigured
    pub thank_you_url: String,
    pub stripe: StripeDetails,
    pub created_at: DateTime<Utc>,
}
