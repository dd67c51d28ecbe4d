//! Payments Backend API
//!
//! The seam to the payment backend: create and delete payment resources.
//! Implementations attach the session's anti-forgery token to every
//! state-changing request.

mod http;
mod mock;

pub use http::HttpPaymentsApi;
pub use mock::{MockOutcome, MockPaymentsApi};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::request::PaymentRequest;

/// Successful create-payment response
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaymentCreated {
    /// Opaque hash of the contributor email
    pub email_hash: String,

    /// Processor client secret used to finalize the charge
    pub client_secret: String,

    /// Backend identifier of the payment resource
    pub uuid: Uuid,
}

/// Backend payments API
#[async_trait]
pub trait PaymentsApi: Send + Sync {
    /// Create a payment resource from the serialized form
    async fn create_payment(&self, request: &PaymentRequest) -> Result<PaymentCreated>;

    /// Delete a payment resource, releasing it on the backend
    async fn delete_payment(&self, uuid: &Uuid) -> Result<()>;

    /// Implementation name for diagnostics
    fn name(&self) -> &str;
}
