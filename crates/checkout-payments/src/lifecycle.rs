//! Payment Lifecycle
//!
//! Owns the create/delete lifecycle of a single payment resource: validate
//! preconditions, create the resource on the backend, hold the record, and
//! tear it down when the contributor abandons the attempt.

use std::str::FromStr;
use std::sync::Arc;

use rust_decimal::Decimal;

use checkout_core::{ContributionInterval, DonationPage};

use crate::api::{PaymentCreated, PaymentsApi};
use crate::error::{PaymentError, Result};
use crate::record::{BillingAddress, BillingDetails, PaymentRecord, StripeDetails};
use crate::request::PaymentRequest;
use crate::telemetry;

/// The one operation the manager currently exposes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleAction {
    Create,
    Delete,
}

/// Lifecycle states. `Creating` and `Deleting` are held across the backend
/// call so an overlapping operation fails fast instead of double-posting.
#[derive(Debug, Default)]
enum FlowState {
    #[default]
    Idle,
    Creating,
    Active(PaymentRecord),
    Deleting(PaymentRecord),
}

/// Manages the lifecycle of one payment resource at a time.
///
/// Reusable across create/delete cycles; at most one [`PaymentRecord`]
/// exists per instance. Nothing is shared across instances.
pub struct PaymentManager<A: PaymentsApi> {
    api: Arc<A>,
    state: FlowState,
}

impl<A: PaymentsApi> PaymentManager<A> {
    pub fn new(api: Arc<A>) -> Self {
        Self {
            api,
            state: FlowState::Idle,
        }
    }

    /// The stored record, present only between a successful create and a
    /// successful delete
    pub fn payment(&self) -> Option<&PaymentRecord> {
        match &self.state {
            FlowState::Active(record) => Some(record),
            _ => None,
        }
    }

    pub fn can_create(&self) -> bool {
        matches!(self.state, FlowState::Idle)
    }

    pub fn can_delete(&self) -> bool {
        matches!(self.state, FlowState::Active(_))
    }

    /// Which operation is currently available; `None` while a backend call
    /// is in flight
    pub fn available_action(&self) -> Option<LifecycleAction> {
        match self.state {
            FlowState::Idle => Some(LifecycleAction::Create),
            FlowState::Active(_) => Some(LifecycleAction::Delete),
            FlowState::Creating | FlowState::Deleting(_) => None,
        }
    }

    /// Create the payment resource from a serialized contribution form.
    ///
    /// Precondition failures reject synchronously, before any network call.
    /// On success the record is stored and also returned; on failure the
    /// manager returns to idle with no partial state.
    pub async fn create_payment(
        &mut self,
        data: &PaymentRequest,
        page: &DonationPage,
    ) -> Result<PaymentRecord> {
        match self.state {
            FlowState::Idle => {}
            FlowState::Creating => return Err(PaymentError::CreationInFlight),
            _ => return Err(PaymentError::PaymentActive),
        }

        // Identity context first, so a request that never completes is
        // still traceable.
        telemetry::set_user(
            Some(data.email.as_str()).filter(|e| !e.is_empty()),
            &data.first_name,
            &data.last_name,
        );

        let (interval, amount) = validate(data, page)?;

        tracing::debug!(api = self.api.name(), page = %page.slug, "creating payment");
        self.state = FlowState::Creating;
        let created = match self.api.create_payment(data).await {
            Ok(created) => created,
            Err(err) => {
                self.state = FlowState::Idle;
                return Err(err);
            }
        };

        let record = assemble_record(data, page, interval, amount, created);
        tracing::info!(uuid = %record.uuid, page = %record.page_slug, "payment created");
        self.state = FlowState::Active(record.clone());
        Ok(record)
    }

    /// Delete the stored payment resource, releasing it on the backend.
    ///
    /// On success the manager returns to idle and `create_payment` becomes
    /// available again. On failure the record is retained so teardown can
    /// be retried.
    pub async fn delete_payment(&mut self) -> Result<()> {
        let record = match std::mem::take(&mut self.state) {
            FlowState::Active(record) => record,
            other => {
                let err = match &other {
                    FlowState::Creating => PaymentError::CreationInFlight,
                    _ => PaymentError::NoPayment,
                };
                self.state = other;
                return Err(err);
            }
        };

        let uuid = record.uuid;
        self.state = FlowState::Deleting(record);
        match self.api.delete_payment(&uuid).await {
            Ok(()) => {
                tracing::info!(uuid = %uuid, "payment deleted");
                self.state = FlowState::Idle;
                Ok(())
            }
            Err(err) => {
                if let FlowState::Deleting(record) = std::mem::take(&mut self.state) {
                    self.state = FlowState::Active(record);
                }
                Err(err)
            }
        }
    }
}

/// Precondition validation. These are page-configuration or incomplete-form
/// errors, raised before the backend is ever contacted.
fn validate(
    data: &PaymentRequest,
    page: &DonationPage,
) -> Result<(ContributionInterval, Decimal)> {
    if page.slug.trim().is_empty() {
        return Err(PaymentError::MissingPageSlug);
    }
    if data
        .mailing_country
        .as_deref()
        .is_none_or(|c| c.trim().is_empty())
    {
        return Err(PaymentError::MissingCountry);
    }
    let interval = match data.interval.as_deref() {
        None => return Err(PaymentError::InvalidInterval(None)),
        Some(raw) => ContributionInterval::from_str(raw)
            .map_err(|_| PaymentError::InvalidInterval(Some(raw.to_string())))?,
    };
    if page
        .payment_account_id
        .as_deref()
        .is_none_or(str::is_empty)
    {
        return Err(PaymentError::MissingPaymentAccount);
    }
    let amount = data
        .amount
        .filter(|a| *a > Decimal::ZERO)
        .ok_or(PaymentError::MissingAmount)?;
    Ok((interval, amount))
}

/// Assemble the stored record from the form, the page, and the backend
/// response. Absent optional form values become empty strings - the
/// processor integration requires every billing key present.
fn assemble_record(
    data: &PaymentRequest,
    page: &DonationPage,
    interval: ContributionInterval,
    amount: Decimal,
    created: PaymentCreated,
) -> PaymentRecord {
    let billing_details = BillingDetails {
        name: data.full_name(),
        email: data.email.clone(),
        phone: data.phone.clone().unwrap_or_default(),
        address: BillingAddress {
            city: data.mailing_city.clone().unwrap_or_default(),
            country: data.mailing_country.clone().unwrap_or_default(),
            line1: data.mailing_street.clone().unwrap_or_default(),
            line2: data.mailing_complement.clone().unwrap_or_default(),
            postal_code: data.mailing_postal_code.clone().unwrap_or_default(),
            state: data.mailing_state.clone().unwrap_or_default(),
        },
    };

    PaymentRecord {
        uuid: created.uuid,
        amount,
        currency: page.currency_or_default(),
        interval,
        page_slug: page.slug.clone(),
        revenue_program_slug: page.revenue_program.slug.clone(),
        email_hash: created.email_hash,
        thank_you_url: page.thank_you_redirect.clone().unwrap_or_default(),
        stripe: StripeDetails {
            account_id: page.payment_account_id.clone().unwrap_or_default(),
            billing_details,
            client_secret: created.client_secret,
        },
        created_at: chrono::Utc::now(),
    }
}
