//! Page Configuration
//!
//! The slice of a contribution page's configuration this crate consumes:
//! preset amount options per interval, the payment element, currency, and
//! the identifiers needed to create a payment against the backend.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::currency::Currency;
use crate::interval::ContributionInterval;

/// Revenue program that owns a contribution page
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RevenueProgram {
    pub slug: String,

    /// Registered nonprofits get the reduced processor rate
    #[serde(default)]
    pub is_nonprofit: bool,
}

/// Kind of a page content element
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementType {
    Amount,
    Payment,
    DonorInfo,
    DonorAddress,
    /// Anything this crate does not consume (images, rich text, benefits...)
    #[serde(other)]
    Other,
}

/// One block of page content
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PageElement {
    #[serde(rename = "type")]
    pub element_type: ElementType,

    /// Element-specific configuration; shape depends on the type
    #[serde(default)]
    pub content: serde_json::Value,
}

/// Configuration carried by the payment element
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PaymentElementContent {
    /// Whether contributors are offered the option to cover processing fees
    #[serde(rename = "offerPayFees", default)]
    pub offer_pay_fees: bool,
}

/// Configuration carried by the amount element
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AmountElementContent {
    #[serde(default)]
    pub options: AmountOptions,
}

/// Preset amount options per contribution interval.
///
/// Values may arrive from page configuration as JSON numbers or numeric
/// strings; both deserialize to [`Decimal`].
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AmountOptions {
    #[serde(default)]
    pub one_time: Vec<Decimal>,
    #[serde(default)]
    pub month: Vec<Decimal>,
    #[serde(default)]
    pub year: Vec<Decimal>,
}

impl AmountOptions {
    /// The ordered preset list active for an interval
    pub fn for_interval(&self, interval: ContributionInterval) -> &[Decimal] {
        match interval {
            ContributionInterval::OneTime => &self.one_time,
            ContributionInterval::Monthly => &self.month,
            ContributionInterval::Yearly => &self.year,
        }
    }
}

/// A contribution page as served by the page service
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DonationPage {
    pub slug: String,

    pub revenue_program: RevenueProgram,

    /// Display currency; pages without one fall back to USD
    #[serde(default)]
    pub currency: Option<Currency>,

    /// Ordered page content elements
    #[serde(default)]
    pub elements: Vec<PageElement>,

    /// Connected processor account the charge is routed through
    #[serde(default)]
    pub payment_account_id: Option<String>,

    /// Where the contributor lands after finalizing
    #[serde(default)]
    pub thank_you_redirect: Option<String>,

    /// Page-level amount override; forces the custom field and pins the
    /// amount across interval changes
    #[serde(default)]
    pub override_amount: Option<Decimal>,
}

impl DonationPage {
    /// Configuration of the payment element.
    ///
    /// Only the first element of the payment type is honored; later ones of
    /// the same type are ignored. Malformed content reads as absent.
    pub fn payment_element(&self) -> Option<PaymentElementContent> {
        self.elements
            .iter()
            .find(|e| e.element_type == ElementType::Payment)
            .and_then(|e| serde_json::from_value(e.content.clone()).ok())
    }

    /// Whether the fee-agreement control should be shown at all.
    ///
    /// The toggle itself lives on the form; its value is submitted as
    /// `agreed_to_pay_fees` on the payment request.
    pub fn offers_pay_fees(&self) -> bool {
        self.payment_element().is_some_and(|c| c.offer_pay_fees)
    }

    /// Preset options from the first amount element
    pub fn amount_options(&self) -> AmountOptions {
        self.elements
            .iter()
            .find(|e| e.element_type == ElementType::Amount)
            .and_then(|e| serde_json::from_value::<AmountElementContent>(e.content.clone()).ok())
            .map(|c| c.options)
            .unwrap_or_default()
    }

    /// Effective display currency
    pub fn currency_or_default(&self) -> Currency {
        self.currency.clone().unwrap_or_default()
    }
}
