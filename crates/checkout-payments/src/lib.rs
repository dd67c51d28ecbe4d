//! # checkout-payments
//!
//! Payment-resource lifecycle for the donation checkout: validate a
//! serialized contribution form, create a payment resource on the backend,
//! hold the resulting record (with the processor client secret needed to
//! finalize), and tear it down if the contributor abandons.
//!
//! ## Lifecycle
//!
//! ```text
//!              create_payment                      ok
//!  ┌────────┐ ───────────────▶ ┌──────────┐ ───────────▶ ┌────────────┐
//!  │  Idle  │                  │ Creating │              │   Active   │
//!  └────────┘ ◀─────────────── └──────────┘              │  (record)  │
//!      ▲            err                                  └────────────┘
//!      │                                                       │
//!      │                       ┌──────────┐   delete_payment   │
//!      └────────────────────── │ Deleting │ ◀──────────────────┘
//!                    ok        └──────────┘
//! ```
//!
//! At most one payment record exists per manager instance. Preconditions
//! (page slug, mailing country, recognized interval, processor account,
//! resolved amount) fail synchronously before any network call, so a
//! misconfigured page never creates a bogus backend resource. A failed
//! deletion retains the record so teardown can be retried; a failed
//! creation returns the manager to idle with no partial state.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use checkout_payments::{HttpPaymentsApi, PaymentManager, PaymentRequest};
//!
//! let api = Arc::new(HttpPaymentsApi::from_env()?);
//! let mut manager = PaymentManager::new(api);
//!
//! let record = manager.create_payment(&request, &page).await?;
//! // hand record.stripe.client_secret to the processor SDK...
//!
//! // contributor navigated away before finalizing:
//! manager.delete_payment().await?;
//! ```

mod api;
mod error;
mod lifecycle;
mod record;
mod request;
pub mod telemetry;

pub use api::{HttpPaymentsApi, MockOutcome, MockPaymentsApi, PaymentCreated, PaymentsApi};
pub use error::{PaymentError, Result};
pub use lifecycle::{LifecycleAction, PaymentManager};
pub use record::{BillingAddress, BillingDetails, PaymentRecord, StripeDetails};
pub use request::PaymentRequest;
